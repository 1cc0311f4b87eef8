//! Reading configuration.

use serde::{Deserialize, Serialize};

/// Draw-request parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Count used when the request is missing, non-numeric, or out of range.
    pub default_count: usize,

    /// Largest count a request may ask for.
    pub max_count: usize,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            default_count: 3,
            max_count: 10,
        }
    }
}

impl ReadingConfig {
    /// Create a new config with a custom default count.
    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    /// Create a new config with a custom maximum count.
    pub fn with_max_count(mut self, count: usize) -> Self {
        self.max_count = count;
        self
    }

    /// Turn a raw request value into a drawable count.
    ///
    /// Unparseable values and values outside `1..=max_count` fall back to
    /// `default_count`. The result never exceeds `catalog_len`.
    pub fn resolve_count(&self, raw: Option<&str>, catalog_len: usize) -> usize {
        let requested = raw.map(str::trim).and_then(|s| s.parse::<usize>().ok());

        let count = match requested {
            Some(n) if (1..=self.max_count).contains(&n) => n,
            _ => {
                if let Some(raw) = raw {
                    tracing::warn!(
                        raw,
                        default = self.default_count,
                        "draw count out of range, using default"
                    );
                }
                self.default_count
            }
        };

        count.min(catalog_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReadingConfig::default();
        assert_eq!(config.default_count, 3);
        assert_eq!(config.max_count, 10);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReadingConfig::default()
            .with_default_count(1)
            .with_max_count(5);
        assert_eq!(config.default_count, 1);
        assert_eq!(config.max_count, 5);
    }

    #[test]
    fn test_resolve_count() {
        let config = ReadingConfig::default();

        assert_eq!(config.resolve_count(Some("5"), 78), 5);
        assert_eq!(config.resolve_count(Some(" 10 "), 78), 10);
        assert_eq!(config.resolve_count(None, 78), 3);
        assert_eq!(config.resolve_count(Some("seven"), 78), 3);
        assert_eq!(config.resolve_count(Some("0"), 78), 3);
        assert_eq!(config.resolve_count(Some("11"), 78), 3);
        assert_eq!(config.resolve_count(Some("-2"), 78), 3);
    }

    #[test]
    fn test_resolve_count_capped_by_catalog() {
        let config = ReadingConfig::default();
        assert_eq!(config.resolve_count(Some("10"), 4), 4);
        assert_eq!(config.resolve_count(None, 2), 2);
    }

    #[test]
    fn test_serialization() {
        let config = ReadingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ReadingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

//! Interpretation report: an ordered list of labeled text sections.
//!
//! The report is plain data. Renderers (HTML templates, JSON APIs, the
//! CLI) walk the sections; the `Display` impl gives a plain-text layout.

use serde::{Deserialize, Serialize};

use super::spread::SpreadType;

/// What a section describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Single-card summary: name, orientation, attribute facts.
    CardSummary,
    /// Position-by-position narrative.
    Positions,
    /// Repeated keywords, or the no-repeats note.
    Themes,
    Elements,
    Numerology,
    NumerologyNotes,
    Astrology,
    MajorArcana,
    DominantSuit,
    Synergy,
    Closing,
}

/// One labeled block of report text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Bullet items (distribution lines).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,

    /// Paragraphs, rendered after the items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            heading: None,
            items: Vec::new(),
            paragraphs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    #[must_use]
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.paragraphs.push(paragraph.into());
        self
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(heading) = &self.heading {
            writeln!(f, "{}:", heading)?;
        }
        for item in &self.items {
            writeln!(f, "  - {}", item)?;
        }
        for paragraph in &self.paragraphs {
            writeln!(f, "{}", paragraph)?;
        }
        Ok(())
    }
}

/// Complete interpretation of one draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationReport {
    pub spread: SpreadType,
    pub sections: Vec<Section>,
}

impl InterpretationReport {
    #[must_use]
    pub fn new(spread: SpreadType) -> Self {
        Self {
            spread,
            sections: Vec::new(),
        }
    }

    /// Display title (the spread's name).
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.spread.title()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn extend(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    /// First section of the given kind.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// Section kinds in report order.
    #[must_use]
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

impl std::fmt::Display for InterpretationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", "=".repeat(self.title().len()))?;
        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

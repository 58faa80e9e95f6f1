use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::result::DetectionResult;

/// Collapsible sections of a detection result, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ResultSection {
    Causes,
    Precautions,
    Food,
    Medications,
}

impl ResultSection {
    pub fn title(&self) -> &'static str {
        match self {
            ResultSection::Causes => "Likely Causes",
            ResultSection::Precautions => "Precautions",
            ResultSection::Food => "Recommended Food",
            ResultSection::Medications => "Medications",
        }
    }

    /// Shorter headings used in the history modal.
    pub fn short_title(&self) -> &'static str {
        match self {
            ResultSection::Causes => "Causes",
            ResultSection::Precautions => "Precautions",
            ResultSection::Food => "Food",
            ResultSection::Medications => "Medications",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResultSection::Causes => "fa-solid fa-circle-exclamation",
            ResultSection::Precautions => "fa-solid fa-shield-halved",
            ResultSection::Food => "fa-solid fa-apple-whole",
            ResultSection::Medications => "fa-solid fa-pills",
        }
    }

    pub fn default_open(&self) -> bool {
        matches!(self, ResultSection::Causes)
    }

    pub fn items<'a>(&self, result: &'a DetectionResult) -> &'a [String] {
        match self {
            ResultSection::Causes => &result.causes,
            ResultSection::Precautions => &result.precautions,
            ResultSection::Food => &result.food_items,
            ResultSection::Medications => &result.medications,
        }
    }
}

pub fn sections(result: &DetectionResult) -> Vec<(ResultSection, &[String])> {
    ResultSection::iter()
        .map(|section| (section, section.items(result)))
        .collect()
}

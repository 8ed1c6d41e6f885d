use serde::{Deserialize, Serialize};

/// Gloss used when a Hebrew word has no Spanish counterpart.
pub const PLACEHOLDER_TRANSLATION: &str = "[sin trad.]";

/// One interlinear unit: a Hebrew token and the Spanish gloss shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub original: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morphology: Option<String>,
}

impl Word {
    /// A Hebrew token that has not been glossed yet.
    pub fn hebrew(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translation: String::new(),
            lexicon_ref: None,
            morphology: None,
        }
    }

    pub fn has_translation(&self) -> bool {
        !self.translation.is_empty() && self.translation != PLACEHOLDER_TRANSLATION
    }
}

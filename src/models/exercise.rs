use serde::{Deserialize, Serialize};

use super::DocumentRef;

/// Document `_type` of catalog exercises in the CMS.
pub const EXERCISE_DOCUMENT_TYPE: &str = "Ejercicio";

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

pub const DIFFICULTY_TIERS: &[DifficultyTier] = &[
    DifficultyTier::Beginner,
    DifficultyTier::Intermediate,
    DifficultyTier::Advanced,
];

impl DifficultyTier {
    /// Value stored in CMS documents.
    pub fn document_value(&self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "principiante",
            DifficultyTier::Intermediate => "intermedio",
            DifficultyTier::Advanced => "avanzado",
        }
    }

    pub fn from_document_value(s: &str) -> Option<Self> {
        DIFFICULTY_TIERS
            .iter()
            .copied()
            .find(|tier| tier.document_value() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "Principiante",
            DifficultyTier::Intermediate => "Intermedio",
            DifficultyTier::Advanced => "Avanzado",
        }
    }
}

/// Image field of an exercise: the uploaded asset plus its accessibility text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
    pub asset: Option<DocumentRef>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

impl ImageField {
    pub fn new(asset_id: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            asset: Some(DocumentRef::new(asset_id)),
            alt: Some(alt.into()),
            caption: None,
        }
    }
}

/// Candidate catalog entry. Required fields are optional here so that
/// incomplete records can be validated instead of rejected at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty_tier: Option<DifficultyTier>,
    pub image: Option<ImageField>,
    pub demo_video_url: Option<String>,
    pub is_active: bool,
}

impl Default for ExerciseEntry {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            description: None,
            difficulty_tier: Some(DifficultyTier::default()),
            image: None,
            demo_video_url: None,
            is_active: true,
        }
    }
}

impl ExerciseEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>, image: ImageField) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            image: Some(image),
            ..Self::default()
        }
    }
}

use serde::{Deserialize, Serialize};

use super::DocumentRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "lbs")]
    Pounds,
    #[serde(rename = "kg")]
    Kilograms,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "lbs",
            WeightUnit::Kilograms => "kg",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lbs" => Some(WeightUnit::Pounds),
            "kg" => Some(WeightUnit::Kilograms),
            _ => None,
        }
    }
}

/// One set within an exercise log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLogEntry {
    pub repetition_count: Option<i64>,
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
}

impl SetLogEntry {
    pub fn new(repetition_count: i64, weight: f64, weight_unit: WeightUnit) -> Self {
        Self {
            repetition_count: Some(repetition_count),
            weight: Some(weight),
            weight_unit: Some(weight_unit),
        }
    }
}

/// Performing one catalog exercise within a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    pub exercise_ref: Option<DocumentRef>,
    pub sets: Vec<SetLogEntry>,
}

impl ExerciseLogEntry {
    pub fn new(exercise_id: impl Into<String>, sets: Vec<SetLogEntry>) -> Self {
        Self {
            exercise_ref: Some(DocumentRef::new(exercise_id)),
            sets,
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}

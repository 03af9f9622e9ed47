//! Display projections for list rows in the CMS studio and the app.
//!
//! Previews are pure and total: they never panic, even on records that fail
//! validation. Missing values simply leave the corresponding part out.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::catalog::ExerciseLookup;
use crate::models::{ExerciseEntry, ExerciseLogEntry, ImageField, SetLogEntry, WorkoutSession};

const ACTIVE_MARK: &str = "✅";
const INACTIVE_MARK: &str = "❌";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preview {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub media: Option<ImageField>,
}

impl ExerciseEntry {
    /// Name, difficulty label with an active/inactive mark, and the image.
    pub fn preview(&self) -> Preview {
        let mark = if self.is_active {
            ACTIVE_MARK
        } else {
            INACTIVE_MARK
        };
        let subtitle = match self.difficulty_tier {
            Some(tier) => format!("{} {}", tier.display_name(), mark),
            None => mark.to_string(),
        };

        Preview {
            title: self.name.clone(),
            subtitle: Some(subtitle),
            media: self.image.clone(),
        }
    }
}

impl WorkoutSession {
    /// Long date as title, `"45 minutos - 3 ejercicios"` as subtitle.
    pub fn preview(&self) -> Preview {
        let exercises = format!("{} ejercicios", self.exercise_count());
        let subtitle = match self.duration_minutes() {
            Some(minutes) => format!("{} minutos - {}", minutes, exercises),
            None => exercises,
        };

        Preview {
            title: self.occurred_at.as_ref().map(format_long_date),
            subtitle: Some(subtitle),
            media: None,
        }
    }
}

impl ExerciseLogEntry {
    /// The referenced exercise's name as title and the set count as subtitle.
    /// The title is absent when the reference does not resolve.
    pub fn preview(&self, catalog: &impl ExerciseLookup) -> Preview {
        let title = self
            .exercise_ref
            .as_ref()
            .and_then(|r| catalog.find_exercise(&r.id))
            .and_then(|exercise| exercise.name.clone());

        Preview {
            title,
            subtitle: Some(format!("{} series", self.set_count())),
            media: None,
        }
    }
}

impl SetLogEntry {
    /// `"10 Repeticiones"` / `"135 lbs"`.
    pub fn preview(&self) -> Preview {
        let title = self
            .repetition_count
            .map(|reps| format!("{} Repeticiones", reps));
        // -0.0 is a valid weight but must not render as "-0"
        let weight = self.weight.map(|w| w + 0.0);
        let subtitle = match (weight, self.weight_unit) {
            (Some(weight), Some(unit)) => Some(format!("{} {}", weight, unit.as_str())),
            (Some(weight), None) => Some(weight.to_string()),
            (None, _) => None,
        };

        Preview {
            title,
            subtitle,
            media: None,
        }
    }
}

/// `19 de octubre de 2026`, in UTC.
pub fn format_long_date(at: &DateTime<Utc>) -> String {
    let month = MONTHS_ES[at.month0() as usize];
    format!("{} de {} de {}", at.day(), month, at.year())
}

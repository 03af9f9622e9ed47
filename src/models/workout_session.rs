use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExerciseLogEntry;

/// Document `_type` of recorded workouts in the CMS.
pub const WORKOUT_DOCUMENT_TYPE: &str = "workout";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<f64>,
    pub exercise_logs: Vec<ExerciseLogEntry>,
}

impl WorkoutSession {
    pub fn new(
        user_id: impl Into<String>,
        occurred_at: DateTime<Utc>,
        duration_seconds: f64,
        exercise_logs: Vec<ExerciseLogEntry>,
    ) -> Self {
        Self {
            id: None,
            user_id: Some(user_id.into()),
            occurred_at: Some(occurred_at),
            duration_seconds: Some(duration_seconds),
            exercise_logs,
        }
    }

    /// Duration rounded half-up to whole minutes. `None` when the duration
    /// is missing, negative or not finite.
    pub fn duration_minutes(&self) -> Option<i64> {
        match self.duration_seconds {
            Some(secs) if secs.is_finite() && secs >= 0.0 => Some((secs / 60.0).round() as i64),
            _ => None,
        }
    }

    pub fn exercise_count(&self) -> usize {
        self.exercise_logs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_duration(secs: Option<f64>) -> WorkoutSession {
        WorkoutSession {
            duration_seconds: secs,
            ..Default::default()
        }
    }

    #[test]
    fn test_duration_minutes_rounds_half_up() {
        assert_eq!(with_duration(Some(0.0)).duration_minutes(), Some(0));
        assert_eq!(with_duration(Some(89.0)).duration_minutes(), Some(1));
        assert_eq!(with_duration(Some(90.0)).duration_minutes(), Some(2));
        assert_eq!(with_duration(Some(2700.0)).duration_minutes(), Some(45));
    }

    #[test]
    fn test_duration_minutes_invalid() {
        assert_eq!(with_duration(None).duration_minutes(), None);
        assert_eq!(with_duration(Some(-5.0)).duration_minutes(), None);
        assert_eq!(with_duration(Some(f64::NAN)).duration_minutes(), None);
    }
}

pub mod exercise;
pub mod reference;
pub mod workout_log;
pub mod workout_session;

pub use exercise::{DifficultyTier, ExerciseEntry, ImageField, DIFFICULTY_TIERS};
pub use reference::DocumentRef;
pub use workout_log::{ExerciseLogEntry, SetLogEntry, WeightUnit};
pub use workout_session::WorkoutSession;

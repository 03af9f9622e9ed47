pub mod catalog;
pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod models;
pub mod preview;
pub mod validation;

pub use catalog::{Catalog, ExerciseLookup, ExerciseOrdering};
pub use document::{decode_document, validate_document, Decoded, Document, DocumentKind};
pub use models::{
    DifficultyTier, DocumentRef, ExerciseEntry, ExerciseLogEntry, ImageField, SetLogEntry,
    WeightUnit, WorkoutSession,
};
pub use preview::Preview;
pub use validation::{validate_exercise, validate_workout, FieldPath, FieldViolation};

//! Decoding raw CMS documents into candidate records.
//!
//! Documents come from the CMS with its own key names (`nombre`, `dificultad`,
//! `durationInSeconds`, ...). Decoding is lenient: a value of the wrong JSON
//! type, or an unknown enumeration value, becomes a [`FieldViolation`] and the
//! field is left unset. Only input that is not an object at all is an error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::models::exercise::EXERCISE_DOCUMENT_TYPE;
use crate::models::workout_session::WORKOUT_DOCUMENT_TYPE;
use crate::models::{
    DifficultyTier, DocumentRef, ExerciseEntry, ExerciseLogEntry, ImageField, SetLogEntry,
    WeightUnit, WorkoutSession,
};
use crate::validation::{validate_exercise, validate_workout, FieldPath, FieldViolation, Violations};

type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Exercise,
    Workout,
}

impl DocumentKind {
    pub fn from_type(document_type: &str) -> Option<Self> {
        match document_type {
            EXERCISE_DOCUMENT_TYPE => Some(DocumentKind::Exercise),
            WORKOUT_DOCUMENT_TYPE => Some(DocumentKind::Workout),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Exercise => "exercise",
            DocumentKind::Workout => "workout",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Exercise(ExerciseEntry),
    Workout(WorkoutSession),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Exercise(_) => DocumentKind::Exercise,
            Document::Workout(_) => DocumentKind::Workout,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Document::Exercise(entry) => entry.id.as_deref(),
            Document::Workout(session) => session.id.as_deref(),
        }
    }
}

/// A decoded record together with every violation found while decoding and
/// validating it. Each path is reported at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub record: T,
    pub violations: Vec<FieldViolation>,
}

impl<T> Decoded<T> {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            record: f(self.record),
            violations: self.violations,
        }
    }
}

/// The document's `_type`.
pub fn document_type(value: &Value) -> Result<&str, SchemaError> {
    as_record(value)?
        .get("_type")
        .and_then(Value::as_str)
        .ok_or(SchemaError::MissingType)
}

pub fn decode_document(value: &Value) -> Result<Decoded<Document>, SchemaError> {
    let doc_type = document_type(value)?;
    match DocumentKind::from_type(doc_type) {
        Some(DocumentKind::Exercise) => Ok(decode_exercise(value)?.map(Document::Exercise)),
        Some(DocumentKind::Workout) => Ok(decode_workout(value)?.map(Document::Workout)),
        None => Err(SchemaError::UnknownType(doc_type.to_string())),
    }
}

/// Every violation in a CMS document, dispatching on its `_type`.
pub fn validate_document(value: &Value) -> Result<Vec<FieldViolation>, SchemaError> {
    decode_document(value).map(|decoded| decoded.violations)
}

pub fn decode_exercise(value: &Value) -> Result<Decoded<ExerciseEntry>, SchemaError> {
    let obj = as_record(value)?;
    let root = FieldPath::root();
    let mut violations = Violations::new();

    let id = read_string(field(obj, "_id"), root.field("id"), &mut violations);
    let name = read_string(field(obj, "nombre"), root.field("name"), &mut violations);
    let description = read_string(
        field(obj, "descripcion"),
        root.field("description"),
        &mut violations,
    );
    let difficulty_tier = if obj.contains_key("dificultad") {
        read_difficulty(field(obj, "dificultad"), root.field("difficultyTier"), &mut violations)
    } else {
        Some(DifficultyTier::default())
    };
    let image = read_image(field(obj, "imagen"), root.field("image"), &mut violations);
    let demo_video_url = read_string(
        field(obj, "videoUrl"),
        root.field("demoVideoUrl"),
        &mut violations,
    );
    let is_active = read_bool(field(obj, "isActive"), root.field("isActive"), &mut violations)
        .unwrap_or(true);

    let entry = ExerciseEntry {
        id,
        name,
        description,
        difficulty_tier,
        image,
        demo_video_url,
        is_active,
    };

    let checked = validate_exercise(&entry);
    Ok(Decoded {
        record: entry,
        violations: merge(violations, checked),
    })
}

pub fn decode_workout(value: &Value) -> Result<Decoded<WorkoutSession>, SchemaError> {
    let obj = as_record(value)?;
    let root = FieldPath::root();
    let mut violations = Violations::new();

    let id = read_string(field(obj, "_id"), root.field("id"), &mut violations);
    let user_id = read_string(field(obj, "userId"), root.field("userId"), &mut violations);
    let occurred_at = read_datetime(field(obj, "date"), root.field("occurredAt"), &mut violations);
    let duration_seconds = read_number(
        field(obj, "durationInSeconds"),
        root.field("durationSeconds"),
        &mut violations,
    );

    let logs_path = root.field("exerciseLogs");
    let exercise_logs = read_array(field(obj, "exercises"), logs_path.clone(), &mut violations)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| read_exercise_log(item, logs_path.index(i), &mut violations))
                .collect()
        })
        .unwrap_or_default();

    let session = WorkoutSession {
        id,
        user_id,
        occurred_at,
        duration_seconds,
        exercise_logs,
    };

    let checked = validate_workout(&session);
    Ok(Decoded {
        record: session,
        violations: merge(violations, checked),
    })
}

fn read_exercise_log(
    value: &Value,
    path: FieldPath,
    violations: &mut Violations,
) -> ExerciseLogEntry {
    let Some(obj) = value.as_object() else {
        type_mismatch(violations, path, "an object", value);
        return ExerciseLogEntry::default();
    };

    let exercise_ref = read_ref(field(obj, "exercise"), path.field("exerciseRef"), violations);

    let sets_path = path.field("sets");
    let sets = read_array(field(obj, "sets"), sets_path.clone(), violations)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| read_set(item, sets_path.index(i), violations))
                .collect()
        })
        .unwrap_or_default();

    ExerciseLogEntry { exercise_ref, sets }
}

fn read_set(value: &Value, path: FieldPath, violations: &mut Violations) -> SetLogEntry {
    let Some(obj) = value.as_object() else {
        type_mismatch(violations, path, "an object", value);
        return SetLogEntry::default();
    };

    let repetition_count =
        read_integer(field(obj, "reps"), path.field("repetitionCount"), violations);
    let weight = read_number(field(obj, "weight"), path.field("weight"), violations);

    let unit_path = path.field("weightUnit");
    let weight_unit = read_string(field(obj, "weightUnit"), unit_path.clone(), violations)
        .and_then(|unit| match WeightUnit::parse(&unit) {
            Some(unit) => Some(unit),
            None => {
                violations.push(unit_path, format!("Unknown weight unit `{}`", unit));
                None
            }
        });

    SetLogEntry {
        repetition_count,
        weight,
        weight_unit,
    }
}

fn read_difficulty(
    value: Option<&Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<DifficultyTier> {
    let raw = read_string(value, path.clone(), violations)?;
    match DifficultyTier::from_document_value(&raw) {
        Some(tier) => Some(tier),
        None => {
            violations.push(path, format!("Unknown difficulty tier `{}`", raw));
            None
        }
    }
}

fn read_image(
    value: Option<&Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<ImageField> {
    let value = value?;
    let Some(obj) = value.as_object() else {
        type_mismatch(violations, path, "an object", value);
        return None;
    };

    Some(ImageField {
        asset: read_ref(field(obj, "asset"), path.field("asset"), violations),
        alt: read_string(field(obj, "alt"), path.field("alt"), violations),
        caption: read_string(field(obj, "caption"), path.field("caption"), violations),
    })
}

fn read_ref(
    value: Option<&Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<DocumentRef> {
    let value = value?;
    match value.get("_ref").and_then(Value::as_str) {
        Some(id) => Some(DocumentRef::new(id)),
        None => {
            type_mismatch(violations, path, "a reference", value);
            None
        }
    }
}

fn read_string(
    value: Option<&Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        other => {
            type_mismatch(violations, path, "a string", other);
            None
        }
    }
}

fn read_bool(value: Option<&Value>, path: FieldPath, violations: &mut Violations) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        other => {
            type_mismatch(violations, path, "a boolean", other);
            None
        }
    }
}

fn read_number(value: Option<&Value>, path: FieldPath, violations: &mut Violations) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        other => {
            type_mismatch(violations, path, "a number", other);
            None
        }
    }
}

fn read_integer(
    value: Option<&Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<i64> {
    let value = value?;
    let Value::Number(n) = value else {
        type_mismatch(violations, path, "a whole number", value);
        return None;
    };

    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => {
            violations.push(path, format!("Expected a whole number, got {}", n));
            None
        }
    }
}

fn read_datetime(
    value: Option<&Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<DateTime<Utc>> {
    let raw = read_string(value, path.clone(), violations)?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(at) => Some(at.with_timezone(&Utc)),
        Err(_) => {
            violations.push(path, format!("Expected an RFC 3339 date-time, got `{}`", raw));
            None
        }
    }
}

fn read_array<'a>(
    value: Option<&'a Value>,
    path: FieldPath,
    violations: &mut Violations,
) -> Option<&'a Vec<Value>> {
    match value? {
        Value::Array(items) => Some(items),
        other => {
            type_mismatch(violations, path, "a list", other);
            None
        }
    }
}

/// Looks up `key`, treating `null` the same as an absent key.
fn field<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn as_record(value: &Value) -> Result<&Object, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::NotARecord(json_kind(value)))
}

fn type_mismatch(violations: &mut Violations, path: FieldPath, expected: &str, got: &Value) {
    violations.push(path, format!("Expected {}, got {}", expected, json_kind(got)));
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Decode problems first, then constraint violations on paths decoding has not
/// already reported.
fn merge(mut decoded: Violations, checked: Vec<FieldViolation>) -> Vec<FieldViolation> {
    let fresh: Vec<FieldViolation> = checked
        .into_iter()
        .filter(|v| !decoded.covers(&v.path))
        .collect();
    decoded.extend(fresh);
    decoded.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(violations: &[FieldViolation]) -> Vec<String> {
        violations.iter().map(|v| v.path.to_string()).collect()
    }

    fn exercise_doc() -> Value {
        json!({
            "_id": "squat",
            "_type": "Ejercicio",
            "nombre": "Sentadilla",
            "descripcion": "A basic squat exercise for legs",
            "dificultad": "intermedio",
            "imagen": {
                "_type": "image",
                "asset": { "_ref": "image-abc-800x600-jpg", "_type": "reference" },
                "alt": "person squatting"
            },
            "videoUrl": "https://www.youtube.com/watch?v=squat",
            "isActive": false
        })
    }

    #[test]
    fn test_decode_valid_exercise() {
        let decoded = decode_exercise(&exercise_doc()).unwrap();
        assert!(decoded.is_valid(), "{:?}", decoded.violations);
        let entry = decoded.record;
        assert_eq!(entry.id.as_deref(), Some("squat"));
        assert_eq!(entry.difficulty_tier, Some(DifficultyTier::Intermediate));
        assert!(!entry.is_active);
        assert_eq!(
            entry.image.unwrap().asset,
            Some(DocumentRef::new("image-abc-800x600-jpg"))
        );
    }

    #[test]
    fn test_absent_fields_take_defaults() {
        let mut doc = exercise_doc();
        let obj = doc.as_object_mut().unwrap();
        obj.remove("dificultad");
        obj.remove("isActive");
        obj.remove("videoUrl");

        let decoded = decode_exercise(&doc).unwrap();
        assert!(decoded.is_valid());
        assert_eq!(decoded.record.difficulty_tier, Some(DifficultyTier::Beginner));
        assert!(decoded.record.is_active);
    }

    #[test]
    fn test_wrong_types_reported_once() {
        let mut doc = exercise_doc();
        doc["nombre"] = json!(42);
        doc["dificultad"] = json!("experto");
        doc["imagen"] = json!("squat.png");

        let decoded = decode_exercise(&doc).unwrap();
        assert_eq!(paths(&decoded.violations), vec!["name", "difficultyTier", "image"]);
        assert_eq!(decoded.violations[0].message, "Expected a string, got a number");
        assert_eq!(
            decoded.violations[1].message,
            "Unknown difficulty tier `experto`"
        );
    }

    #[test]
    fn test_null_difficulty_is_missing() {
        let mut doc = exercise_doc();
        doc["dificultad"] = Value::Null;
        let decoded = decode_exercise(&doc).unwrap();
        assert_eq!(paths(&decoded.violations), vec!["difficultyTier"]);
    }

    #[test]
    fn test_decode_workout() {
        let doc = json!({
            "_id": "w1",
            "_type": "workout",
            "userId": "user_2abc",
            "date": "2026-10-19T07:30:00+02:00",
            "durationInSeconds": 3600,
            "exercises": [{
                "_key": "k1",
                "_type": "exerciseLog",
                "exercise": { "_ref": "squat", "_type": "reference" },
                "sets": [
                    { "_key": "s1", "reps": 10, "weight": 135, "weightUnit": "lbs" },
                    { "_key": "s2", "reps": 8.0, "weight": 140.5, "weightUnit": "lbs" }
                ]
            }]
        });

        let decoded = decode_workout(&doc).unwrap();
        assert!(decoded.is_valid(), "{:?}", decoded.violations);
        let session = decoded.record;
        assert_eq!(
            session.occurred_at.unwrap().to_rfc3339(),
            "2026-10-19T05:30:00+00:00"
        );
        assert_eq!(session.exercise_logs[0].sets[1].repetition_count, Some(8));
        assert_eq!(session.exercise_logs[0].sets[1].weight, Some(140.5));
    }

    #[test]
    fn test_workout_nested_type_errors_keep_indices() {
        let doc = json!({
            "_type": "workout",
            "userId": "user_2abc",
            "date": "yesterday",
            "durationInSeconds": "long",
            "exercises": [
                "not an object",
                {
                    "exercise": "squat",
                    "sets": [
                        { "reps": 2.5, "weight": 10, "weightUnit": "stone" }
                    ]
                }
            ]
        });

        let decoded = decode_workout(&doc).unwrap();
        assert_eq!(
            paths(&decoded.violations),
            vec![
                "occurredAt",
                "durationSeconds",
                "exerciseLogs[0]",
                "exerciseLogs[1].exerciseRef",
                "exerciseLogs[1].sets[0].repetitionCount",
                "exerciseLogs[1].sets[0].weightUnit",
            ]
        );
    }

    #[test]
    fn test_non_record_is_an_error() {
        assert_eq!(
            decode_exercise(&json!([1, 2])),
            Err(SchemaError::NotARecord("a list"))
        );
        assert_eq!(
            validate_document(&json!({ "nombre": "Sentadilla" })),
            Err(SchemaError::MissingType)
        );
        assert_eq!(
            validate_document(&json!({ "_type": "sanity.imageAsset" })),
            Err(SchemaError::UnknownType("sanity.imageAsset".to_string()))
        );
    }
}

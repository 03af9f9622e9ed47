#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use fitlog::models::{
    ExerciseEntry, ExerciseLogEntry, ImageField, SetLogEntry, WeightUnit, WorkoutSession,
};
use fitlog::FieldViolation;

pub fn valid_exercise() -> ExerciseEntry {
    ExerciseEntry::new(
        "Squat",
        "A basic squat exercise for legs",
        ImageField::new("image-squat-800x600-jpg", "person squatting"),
    )
}

pub fn valid_session() -> WorkoutSession {
    WorkoutSession::new(
        "user_2abcDEF",
        Utc.with_ymd_and_hms(2026, 10, 19, 7, 30, 0).unwrap(),
        2700.0,
        vec![
            ExerciseLogEntry::new(
                "squat",
                vec![
                    SetLogEntry::new(10, 135.0, WeightUnit::Pounds),
                    SetLogEntry::new(8, 155.0, WeightUnit::Pounds),
                ],
            ),
            ExerciseLogEntry::new(
                "bench-press",
                vec![SetLogEntry::new(5, 60.0, WeightUnit::Kilograms)],
            ),
        ],
    )
}

pub fn paths(violations: &[FieldViolation]) -> Vec<String> {
    violations.iter().map(|v| v.path.to_string()).collect()
}

pub fn exercise_document(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "_type": "Ejercicio",
        "nombre": name,
        "descripcion": "Detailed technique and tips for this movement",
        "dificultad": "principiante",
        "imagen": {
            "_type": "image",
            "asset": { "_ref": format!("image-{}-640x480-png", id), "_type": "reference" },
            "alt": format!("{} demonstration", name)
        },
        "isActive": true
    })
}

pub fn workout_document(id: &str, exercise_ids: &[&str]) -> Value {
    let exercises: Vec<Value> = exercise_ids
        .iter()
        .enumerate()
        .map(|(i, exercise_id)| {
            json!({
                "_key": format!("log{}", i),
                "_type": "exerciseLog",
                "exercise": { "_ref": exercise_id, "_type": "reference" },
                "sets": [
                    {
                        "_key": "set0",
                        "_type": "setLog",
                        "reps": 10,
                        "weight": 60,
                        "weightUnit": "kg"
                    }
                ]
            })
        })
        .collect();

    json!({
        "_id": id,
        "_type": "workout",
        "userId": "user_2abcDEF",
        "date": "2026-10-19T07:30:00Z",
        "durationInSeconds": 1800,
        "exercises": exercises
    })
}

/// One document per line.
pub fn ndjson(documents: &[Value]) -> String {
    documents
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

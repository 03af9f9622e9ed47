use super::{FieldPath, FieldViolation, Violations};
use crate::models::{ExerciseLogEntry, SetLogEntry, WorkoutSession};

/// Validate a workout session and every nested exercise log and set.
///
/// Nested violations carry indexed paths such as
/// `exerciseLogs[1].sets[0].repetitionCount`.
pub fn validate_workout(session: &WorkoutSession) -> Vec<FieldViolation> {
    let mut violations = Violations::new();
    let root = FieldPath::root();

    if session.user_id.as_deref().map_or(true, str::is_empty) {
        violations.push(root.field("userId"), "User id is required");
    }

    if session.occurred_at.is_none() {
        violations.push(root.field("occurredAt"), "Date is required");
    }

    match session.duration_seconds {
        None => violations.push(root.field("durationSeconds"), "Duration is required"),
        Some(secs) if !secs.is_finite() => {
            violations.push(root.field("durationSeconds"), "Duration must be a finite number")
        }
        Some(secs) if secs < 0.0 => {
            violations.push(root.field("durationSeconds"), "Duration must be at least 0")
        }
        Some(_) => {}
    }

    let logs_path = root.field("exerciseLogs");
    if session.exercise_logs.is_empty() {
        violations.push(
            logs_path.clone(),
            "A workout must contain at least one exercise",
        );
    }
    for (i, log) in session.exercise_logs.iter().enumerate() {
        check_exercise_log(&mut violations, logs_path.index(i), log);
    }

    violations.into_vec()
}

fn check_exercise_log(violations: &mut Violations, path: FieldPath, log: &ExerciseLogEntry) {
    match &log.exercise_ref {
        None => violations.push(path.field("exerciseRef"), "Exercise is required"),
        Some(r) if !r.is_well_formed() => violations.push(
            path.field("exerciseRef"),
            format!("Exercise reference `{}` is malformed", r.id),
        ),
        Some(_) => {}
    }

    let sets_path = path.field("sets");
    if log.sets.is_empty() {
        violations.push(
            sets_path.clone(),
            "An exercise must have at least one set",
        );
    }
    for (i, set) in log.sets.iter().enumerate() {
        check_set(violations, sets_path.index(i), set);
    }
}

fn check_set(violations: &mut Violations, path: FieldPath, set: &SetLogEntry) {
    match set.repetition_count {
        None => violations.push(path.field("repetitionCount"), "Repetitions are required"),
        Some(reps) if reps < 1 => violations.push(
            path.field("repetitionCount"),
            "Repetitions must be at least 1",
        ),
        Some(_) => {}
    }

    match set.weight {
        None => violations.push(path.field("weight"), "Weight is required"),
        Some(w) if !w.is_finite() => {
            violations.push(path.field("weight"), "Weight must be a finite number")
        }
        Some(w) if w < 0.0 => violations.push(path.field("weight"), "Weight must be at least 0"),
        Some(_) => {}
    }

    if set.weight_unit.is_none() {
        violations.push(path.field("weightUnit"), "Weight unit is required");
    }
}

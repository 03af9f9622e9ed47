//! Validating a whole CMS export.
//!
//! An export is NDJSON: one document per line. Exercise and workout documents
//! are validated on blocking worker tasks, and workout references are checked
//! against the exercises present in the same export.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::catalog::{Catalog, ExerciseLookup};
use crate::document::{decode_document, document_type, Document, DocumentKind};
use crate::error::{DatasetError, Result};
use crate::models::{ExerciseEntry, WorkoutSession};
use crate::validation::{FieldPath, FieldViolation};

const DRAFT_PREFIX: &str = "drafts.";

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub line: usize,
    pub id: Option<String>,
    pub kind: DocumentKind,
    pub violations: Vec<FieldViolation>,
}

impl DocumentReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetReport {
    /// Validated documents in export order.
    pub documents: Vec<DocumentReport>,
    /// Documents of other types (assets, system documents).
    pub skipped: usize,
}

impl DatasetReport {
    pub fn invalid(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents.iter().filter(|d| !d.is_valid())
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid().count()
    }

    pub fn violation_count(&self) -> usize {
        self.documents.iter().map(|d| d.violations.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.invalid_count() == 0
    }
}

#[derive(Debug, Clone)]
pub struct DatasetValidator {
    concurrency: usize,
}

impl Default for DatasetValidator {
    fn default() -> Self {
        Self::new(4)
    }
}

impl DatasetValidator {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub async fn validate_file(&self, path: impl AsRef<Path>) -> Result<DatasetReport> {
        let path = path.as_ref();
        tracing::info!("Reading export: {}", path.display());
        let contents = tokio::fs::read_to_string(path).await?;
        self.validate_str(&contents).await
    }

    pub async fn validate_str(&self, contents: &str) -> Result<DatasetReport> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::new();
        let mut skipped = 0;

        for (i, raw) in contents.lines().enumerate() {
            let line = i + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(raw)
                .map_err(|source| DatasetError::Json { line, source })?;
            let doc_type =
                document_type(&value).map_err(|source| DatasetError::Schema { line, source })?;
            if DocumentKind::from_type(doc_type).is_none() {
                tracing::debug!("Skipping {} document on line {}", doc_type, line);
                skipped += 1;
                continue;
            }

            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .expect("validation semaphore is never closed");
            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                decode_document(&value)
            });
            handles.push((line, handle));
        }

        let mut decoded = Vec::with_capacity(handles.len());
        for (line, handle) in handles {
            let result = handle
                .await?
                .map_err(|source| DatasetError::Schema { line, source })?;
            decoded.push((line, result));
        }

        let catalog = published_catalog(decoded.iter().map(|(_, d)| &d.record));
        tracing::debug!("{} published exercises in export", catalog.len());

        let documents = decoded
            .into_iter()
            .map(|(line, result)| {
                let mut violations = result.violations;
                if let Document::Workout(session) = &result.record {
                    violations.extend(dangling_references(session, &catalog));
                }
                DocumentReport {
                    line,
                    id: result.record.id().map(str::to_string),
                    kind: result.record.kind(),
                    violations,
                }
            })
            .collect();

        let report = DatasetReport { documents, skipped };
        tracing::info!(
            "Validated {} documents ({} invalid, {} skipped)",
            report.documents.len(),
            report.invalid_count(),
            report.skipped
        );
        Ok(report)
    }
}

/// Published (non-draft) exercises; drafts cannot be referenced.
fn published_catalog<'a>(documents: impl Iterator<Item = &'a Document>) -> Catalog {
    let entries: Vec<ExerciseEntry> = documents
        .filter_map(|document| match document {
            Document::Exercise(entry) => Some(entry),
            Document::Workout(_) => None,
        })
        .filter(|entry| {
            entry
                .id
                .as_deref()
                .map(|id| !id.starts_with(DRAFT_PREFIX))
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    Catalog::new(entries)
}

/// Well-formed references that do not resolve in `catalog`.
pub fn dangling_references(
    session: &WorkoutSession,
    catalog: &impl ExerciseLookup,
) -> Vec<FieldViolation> {
    let logs_path = FieldPath::root().field("exerciseLogs");
    session
        .exercise_logs
        .iter()
        .enumerate()
        .filter_map(|(i, log)| {
            let reference = log.exercise_ref.as_ref()?;
            if !reference.is_well_formed() || catalog.contains(&reference.id) {
                return None;
            }
            tracing::warn!(
                "Workout {} references missing exercise {}",
                session.id.as_deref().unwrap_or("<no id>"),
                reference.id
            );
            Some(FieldViolation {
                path: logs_path.index(i).field("exerciseRef"),
                message: format!("References missing exercise `{}`", reference.id),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseLogEntry, SetLogEntry, WeightUnit};
    use chrono::Utc;
    use std::collections::HashMap;

    #[test]
    fn test_dangling_references() {
        let session = WorkoutSession::new(
            "user_1",
            Utc::now(),
            60.0,
            vec![
                ExerciseLogEntry::new(
                    "squat",
                    vec![SetLogEntry::new(5, 100.0, WeightUnit::Kilograms)],
                ),
                ExerciseLogEntry::new(
                    "deadlift",
                    vec![SetLogEntry::new(5, 140.0, WeightUnit::Kilograms)],
                ),
                ExerciseLogEntry::new(
                    "bad id!",
                    vec![SetLogEntry::new(5, 140.0, WeightUnit::Kilograms)],
                ),
            ],
        );
        let mut catalog = HashMap::new();
        catalog.insert("squat".to_string(), ExerciseEntry::default());

        let violations = dangling_references(&session, &catalog);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "exerciseLogs[1].exerciseRef");
        assert_eq!(violations[0].message, "References missing exercise `deadlift`");
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = DatasetReport::default();
        assert!(report.is_clean());
        assert_eq!(report.violation_count(), 0);
    }

    #[test]
    fn test_concurrency_floor() {
        assert_eq!(DatasetValidator::new(0).concurrency, 1);
    }
}

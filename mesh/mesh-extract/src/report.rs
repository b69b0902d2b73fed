//! Batch results.

use std::fmt;

use mesh_types::SegmentId;
use serde::{Deserialize, Serialize};

use crate::outcome::{SegmentFailure, SegmentOutput, SegmentStage};

/// Outcome of one segment.
pub type SegmentOutcome = Result<SegmentOutput, SegmentFailure>;

/// Outcomes of a batch, in the order the ids were given.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per requested id.
    pub outcomes: Vec<SegmentOutcome>,
}

impl BatchReport {
    /// Wrap a list of outcomes.
    #[must_use]
    pub const fn new(outcomes: Vec<SegmentOutcome>) -> Self {
        Self { outcomes }
    }

    /// Exported segments, in input order.
    pub fn succeeded(&self) -> impl Iterator<Item = &SegmentOutput> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    /// Failed segments, in input order.
    pub fn failed(&self) -> impl Iterator<Item = &SegmentFailure> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// Number of exported segments.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    /// Number of failed segments.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// Whether every segment was exported.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }

    /// Serializable digest of the batch.
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.outcomes.len(),
            ..BatchSummary::default()
        };
        for outcome in &self.outcomes {
            match outcome {
                Ok(out) => {
                    summary.succeeded += 1;
                    if out.is_empty() {
                        summary.empty += 1;
                    }
                    summary.vertices_written += out.vertices;
                    summary.faces_written += out.faces;
                }
                Err(failure) => {
                    summary.failed += 1;
                    summary.failures.push(FailureRecord {
                        id: failure.id,
                        stage: failure.stage,
                        message: failure.cause.to_string(),
                    });
                }
            }
        }
        summary
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Batch: {} segments, {} written, {} failed",
            self.outcomes.len(),
            self.success_count(),
            self.failure_count()
        )
    }
}

/// Counts for a finished batch.
///
/// # Example
///
/// ```
/// use mesh_extract::BatchReport;
///
/// let summary = BatchReport::default().summary();
/// assert_eq!(summary.total, 0);
/// assert!(summary.failures.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Segments requested.
    pub total: usize,
    /// Segments exported.
    pub succeeded: usize,
    /// Segments that failed.
    pub failed: usize,
    /// Exported segments with no geometry inside the box.
    pub empty: usize,
    /// Vertices across all written files.
    pub vertices_written: usize,
    /// Faces across all written files.
    pub faces_written: usize,
    /// One record per failed segment, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureRecord>,
}

/// A failed segment in a [`BatchSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// The segment.
    pub id: SegmentId,
    /// Last stage completed.
    pub stage: SegmentStage,
    /// The error message.
    pub message: String,
}

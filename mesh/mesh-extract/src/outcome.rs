//! Per-segment outcomes.

use std::fmt;

use mesh_clip::ClipOutput;
use mesh_io::SegmentFiles;
use mesh_types::SegmentId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SegmentError;

/// Progress of one segment through the pipeline.
///
/// Stages are reached in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStage {
    /// Nothing done yet.
    Pending,
    /// Raw mesh retrieved from the source.
    Fetched,
    /// Vertices tested against the box and compacted.
    Filtered,
    /// Faces rewritten to the compacted vertices.
    Remapped,
    /// Color resolved and painted onto the vertices.
    Materialized,
    /// OBJ and MTL written.
    Written,
}

impl fmt::Display for SegmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Fetched => "fetched",
            Self::Filtered => "filtered",
            Self::Remapped => "remapped",
            Self::Materialized => "materialized",
            Self::Written => "written",
        };
        f.write_str(name)
    }
}

/// A segment that was exported.
#[derive(Debug, Clone)]
pub struct SegmentOutput {
    /// The segment.
    pub id: SegmentId,
    /// Files written for it.
    pub files: SegmentFiles,
    /// Vertices in the raw mesh.
    pub original_vertices: usize,
    /// Faces in the raw mesh.
    pub original_faces: usize,
    /// Vertices written.
    pub vertices: usize,
    /// Faces written.
    pub faces: usize,
}

impl SegmentOutput {
    pub(crate) fn new(id: SegmentId, files: SegmentFiles, clip: &ClipOutput) -> Self {
        Self {
            id,
            files,
            original_vertices: clip.original_vertices,
            original_faces: clip.original_faces,
            vertices: clip.kept_vertices(),
            faces: clip.kept_faces(),
        }
    }

    /// Whether the box kept nothing of this segment. The files exist but
    /// hold no geometry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertices == 0
    }
}

/// A segment that could not be exported.
#[derive(Debug, Error)]
#[error("segment {id} failed after stage '{stage}': {cause}")]
pub struct SegmentFailure {
    /// The segment.
    pub id: SegmentId,
    /// Last stage completed before the failure.
    pub stage: SegmentStage,
    /// What went wrong.
    #[source]
    pub cause: SegmentError,
}

impl SegmentFailure {
    pub(crate) fn new(id: SegmentId, stage: SegmentStage, cause: impl Into<SegmentError>) -> Self {
        Self {
            id,
            stage,
            cause: cause.into(),
        }
    }
}

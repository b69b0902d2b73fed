//! The batch driver.

use std::borrow::Cow;

use mesh_clip::{clip_mesh, ClipError};
use mesh_io::save_segment;
use mesh_material::{assign_material, paint_vertices, ColorMap};
use mesh_types::SegmentId;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::ExtractConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::outcome::{SegmentFailure, SegmentOutput, SegmentStage};
use crate::report::{BatchReport, SegmentOutcome};
use crate::source::MeshSource;

/// Runs fetch, clip, color and export for a list of segments.
///
/// Built with [`Extractor::builder`]. A failing segment never stops the
/// batch; it is recorded in the [`BatchReport`] and the next one starts.
///
/// # Example
///
/// ```
/// use mesh_extract::{Extractor, ExtractConfig, InMemorySource};
/// use mesh_types::{IndexedMesh, SegmentId};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut source = InMemorySource::new();
/// source.insert(
///     SegmentId::new(1),
///     IndexedMesh::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]).unwrap(),
/// );
///
/// let extractor = Extractor::builder()
///     .source(&source)
///     .config(ExtractConfig::default().with_output_dir(dir.path()))
///     .build()
///     .unwrap();
///
/// // Segment 2 is unknown to the source; the batch still completes.
/// let report = extractor.run(&[SegmentId::new(1), SegmentId::new(2)]).unwrap();
/// assert_eq!(report.success_count(), 1);
/// assert_eq!(report.failure_count(), 1);
/// assert!(dir.path().join("seg_1.obj").exists());
/// ```
pub struct Extractor<'a> {
    source: &'a dyn MeshSource,
    colors: Cow<'a, ColorMap>,
    config: ExtractConfig,
}

impl<'a> Extractor<'a> {
    /// Start configuring an extractor.
    #[must_use]
    pub fn builder() -> ExtractorBuilder<'a> {
        ExtractorBuilder::default()
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Export every id in `ids`.
    ///
    /// Outcomes are reported in the order of `ids`, in both sequential and
    /// parallel mode.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::EmptyBatch`] if `ids` is empty, or
    /// [`ExtractError::ThreadPool`] if the parallel worker pool cannot be
    /// started. Per-segment failures are not errors; see
    /// [`BatchReport::failed`].
    pub fn run(&self, ids: &[SegmentId]) -> ExtractResult<BatchReport> {
        if ids.is_empty() {
            return Err(ExtractError::EmptyBatch);
        }

        info!(
            segments = ids.len(),
            parallel = self.config.parallel,
            output_dir = %self.config.output_dir.display(),
            "Starting extraction"
        );

        let outcomes = if self.config.parallel {
            self.run_parallel(ids)?
        } else {
            ids.iter().map(|&id| self.process(id)).collect()
        };

        let report = BatchReport::new(outcomes);
        info!(
            succeeded = report.success_count(),
            failed = report.failure_count(),
            "All meshes have been processed, filtered and saved"
        );
        Ok(report)
    }

    fn run_parallel(&self, ids: &[SegmentId]) -> ExtractResult<Vec<SegmentOutcome>> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = self.config.num_threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;

        Ok(pool.install(|| ids.par_iter().map(|&id| self.process(id)).collect()))
    }

    /// [`extract_segment`](Self::extract_segment) plus the per-segment log line.
    fn process(&self, id: SegmentId) -> SegmentOutcome {
        let outcome = self.extract_segment(id);
        match &outcome {
            Ok(out) => info!(
                segment = %id,
                path = %out.files.obj.display(),
                vertices = out.vertices,
                faces = out.faces,
                "Segment saved"
            ),
            Err(failure) => warn!(
                segment = %id,
                stage = %failure.stage,
                error = %failure.cause,
                "Segment failed"
            ),
        }
        outcome
    }

    /// Export a single segment.
    ///
    /// # Errors
    ///
    /// Returns a [`SegmentFailure`] naming the last stage reached if the
    /// mesh cannot be fetched, is malformed, or cannot be written. Files
    /// already written are left in place.
    pub fn extract_segment(&self, id: SegmentId) -> Result<SegmentOutput, SegmentFailure> {
        let raw = self
            .source
            .fetch_mesh(id)
            .map_err(|e| SegmentFailure::new(id, SegmentStage::Pending, e))?;

        let mut clipped = clip_mesh(&raw, &self.config.clip).map_err(|e| {
            let stage = match e {
                ClipError::IndexOutOfRange { .. } => SegmentStage::Filtered,
                _ => SegmentStage::Fetched,
            };
            SegmentFailure::new(id, stage, e)
        })?;
        drop(raw);

        if clipped.is_empty() {
            warn!(segment = %id, "Nothing inside the box, writing empty mesh");
        }

        let material = assign_material(id, &self.colors);
        paint_vertices(&mut clipped.mesh, &material);

        let files = save_segment(&self.config.output_dir, &clipped.mesh, &material)
            .map_err(|e| SegmentFailure::new(id, SegmentStage::Materialized, e))?;

        Ok(SegmentOutput::new(id, files, &clipped))
    }
}

/// Builder for [`Extractor`].
#[derive(Default)]
pub struct ExtractorBuilder<'a> {
    source: Option<&'a dyn MeshSource>,
    colors: Option<&'a ColorMap>,
    config: ExtractConfig,
}

impl<'a> ExtractorBuilder<'a> {
    /// Set the mesh source. Required.
    #[must_use]
    pub fn source(mut self, source: &'a dyn MeshSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the color map. Without one every segment is white.
    #[must_use]
    pub fn colors(mut self, colors: &'a ColorMap) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Set the configuration. Defaults to [`ExtractConfig::default`].
    #[must_use]
    pub fn config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingSource`] if no source was set, or
    /// [`ExtractError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn build(self) -> ExtractResult<Extractor<'a>> {
        let source = self.source.ok_or(ExtractError::MissingSource)?;
        self.config.validate()?;

        Ok(Extractor {
            source,
            colors: self
                .colors
                .map_or_else(|| Cow::Owned(ColorMap::new()), Cow::Borrowed),
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SegmentError, SourceError};
    use crate::source::InMemorySource;
    use mesh_types::{Aabb, IndexedMesh, Vertex};

    fn triangle() -> IndexedMesh {
        IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn build_requires_source() {
        assert!(matches!(
            Extractor::builder().build(),
            Err(ExtractError::MissingSource)
        ));
    }

    #[test]
    fn build_validates_config() {
        let source = InMemorySource::new();
        let result = Extractor::builder()
            .source(&source)
            .config(ExtractConfig::default().with_num_threads(0))
            .build();
        assert!(matches!(result, Err(ExtractError::InvalidConfig(_))));
    }

    #[test]
    fn empty_batch_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let source = InMemorySource::new();
        let extractor = Extractor::builder()
            .source(&source)
            .config(ExtractConfig::default().with_output_dir(dir.path()))
            .build()
            .unwrap();
        assert!(matches!(extractor.run(&[]), Err(ExtractError::EmptyBatch)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn malformed_mesh_fails_after_filter() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = triangle();
        bad.faces.push([0, 1, 7]);
        let source: InMemorySource = [(SegmentId(1), bad)].into_iter().collect();
        let extractor = Extractor::builder()
            .source(&source)
            .config(ExtractConfig::default().with_output_dir(dir.path()))
            .build()
            .unwrap();

        let failure = extractor.extract_segment(SegmentId(1)).unwrap_err();
        assert_eq!(failure.stage, SegmentStage::Filtered);
        assert!(matches!(failure.cause, SegmentError::Clip(_)));
        assert!(!dir.path().join("seg_1.obj").exists());
    }

    #[test]
    fn fetch_failure_is_pending() {
        let dir = tempfile::tempdir().unwrap();
        let source = |id: SegmentId| -> Result<IndexedMesh, SourceError> {
            Err(SourceError::Transient {
                id,
                message: "timeout".into(),
            })
        };
        let extractor = Extractor::builder()
            .source(&source)
            .config(ExtractConfig::default().with_output_dir(dir.path()))
            .build()
            .unwrap();

        let failure = extractor.extract_segment(SegmentId(2)).unwrap_err();
        assert_eq!(failure.stage, SegmentStage::Pending);
        assert!(matches!(failure.cause, SegmentError::Fetch(_)));
    }

    #[test]
    fn empty_clip_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let source: InMemorySource = [(SegmentId(3), triangle())].into_iter().collect();
        let config = ExtractConfig::default()
            .with_output_dir(dir.path())
            .with_clip(mesh_clip::ClipParams::bounded(Aabb::from_arrays(
                [10.0; 3], [20.0; 3],
            )));
        let extractor = Extractor::builder()
            .source(&source)
            .config(config)
            .build()
            .unwrap();

        let out = extractor.extract_segment(SegmentId(3)).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.original_faces, 1);
        assert!(out.files.obj.exists());
        assert!(out.files.mtl.exists());
    }

    #[test]
    fn write_failure_is_materialized() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let source: InMemorySource = [(SegmentId(4), triangle())].into_iter().collect();
        let extractor = Extractor::builder()
            .source(&source)
            .config(ExtractConfig::default().with_output_dir(&blocker))
            .build()
            .unwrap();

        let failure = extractor.extract_segment(SegmentId(4)).unwrap_err();
        assert_eq!(failure.stage, SegmentStage::Materialized);
        assert!(matches!(failure.cause, SegmentError::Write(_)));
    }
}

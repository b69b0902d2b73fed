//! Per-segment file pairs (`seg_<id>.obj` + `seg_<id>.mtl`).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use mesh_material::Material;
use mesh_types::{IndexedMesh, SegmentId};

use crate::error::{IoError, IoResult};
use crate::mtl::write_mtl;
use crate::obj::{write_obj, MaterialLink};

/// Paths of the two files written for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFiles {
    /// Geometry file, `<dir>/seg_<id>.obj`.
    pub obj: PathBuf,
    /// Material library, `<dir>/seg_<id>.mtl`.
    pub mtl: PathBuf,
}

impl SegmentFiles {
    /// File stem shared by both files.
    #[must_use]
    pub fn stem(id: SegmentId) -> String {
        format!("seg_{id}")
    }

    /// Paths for `id` inside `dir`.
    #[must_use]
    pub fn for_segment(dir: &Path, id: SegmentId) -> Self {
        let stem = Self::stem(id);
        Self {
            obj: dir.join(format!("{stem}.obj")),
            mtl: dir.join(format!("{stem}.mtl")),
        }
    }

    /// MTL file name as referenced from the OBJ (no directory part).
    #[must_use]
    pub fn mtl_file_name(&self) -> String {
        self.mtl
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Write a segment's OBJ and MTL into `dir`, creating it if needed.
///
/// Existing files for the same segment are overwritten. The OBJ starts with
/// `mtllib seg_<id>.mtl` and `usemtl <material name>`. An empty mesh still
/// produces both files.
///
/// # Errors
///
/// Returns [`IoError::File`] (tagged with the offending path) if the
/// directory cannot be created or either file cannot be written.
pub fn save_segment(dir: &Path, mesh: &IndexedMesh, material: &Material) -> IoResult<SegmentFiles> {
    fs::create_dir_all(dir).map_err(|e| IoError::at_path(e, dir))?;

    let files = SegmentFiles::for_segment(dir, material.segment);

    write_file(&files.mtl, |w| write_mtl(material, w))?;

    let library = files.mtl_file_name();
    let link = MaterialLink {
        library: &library,
        material: &material.name,
    };
    write_file(&files.obj, |w| write_obj(mesh, Some(link), w))?;

    tracing::debug!(
        segment = %material.segment,
        path = %files.obj.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Wrote segment"
    );

    Ok(files)
}

fn write_file<F>(path: &Path, body: F) -> IoResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> IoResult<()>,
{
    let file = File::create(path).map_err(|e| IoError::at_path(e, path))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|()| writer.flush().map_err(IoError::from))
        .map_err(|e| match e {
            IoError::Io(source) => IoError::at_path(source, path),
            other => other,
        })
}

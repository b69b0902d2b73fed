//! Wavefront OBJ support.
//!
//! Only the subset needed for colored triangle meshes is handled.
//!
//! # Written Format
//!
//! ```text
//! mtllib seg_42.mtl            – optional material library (relative path)
//! usemtl SegmentMaterial_42    – optional active material
//! # vertices: 3
//! # triangles: 1
//! v x y z r g b                – position, then color if the vertex has one
//! f 1 2 3                      – 1-based vertex indices
//! ```
//!
//! When a material link is given, its two directives are always the first
//! two lines of the file.
//!
//! # Read Format
//!
//! The reader accepts `v` lines (extra color components are kept), `f`
//! lines in any of the `v`, `v/vt`, `v//vn` or `v/vt/vn` forms, negative
//! (relative) indices, and polygons, which are fan-triangulated. Every other
//! statement is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Point3, Rgb, Vertex};

use crate::error::{IoError, IoResult};

/// Material directives placed at the top of an OBJ file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialLink<'a> {
    /// File name of the material library, relative to the OBJ file.
    pub library: &'a str,
    /// Name of the material to activate.
    pub material: &'a str,
}

/// Write the geometry section of an OBJ file: counts, vertices, faces.
///
/// Vertex colors are appended to `v` lines for vertices that have one.
/// Face indices are written 1-based.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_obj_body<W: Write>(mesh: &IndexedMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "# vertices: {}", mesh.vertices.len())?;
    writeln!(writer, "# triangles: {}", mesh.faces.len())?;

    for v in &mesh.vertices {
        let p = &v.position;
        match v.color {
            Some(c) => writeln!(
                writer,
                "v {} {} {} {:.6} {:.6} {:.6}",
                p.x, p.y, p.z, c.r, c.g, c.b
            )?,
            None => writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?,
        }
    }

    for &[a, b, c] in &mesh.faces {
        writeln!(
            writer,
            "f {} {} {}",
            u64::from(a) + 1,
            u64::from(b) + 1,
            u64::from(c) + 1
        )?;
    }

    Ok(())
}

/// Write a complete OBJ document.
///
/// The geometry is rendered into a buffer first; the material directives
/// (if any) and the buffered geometry are then written in one go, so the
/// directives always lead the file.
///
/// # Errors
///
/// Returns an error if the writer fails.
///
/// # Example
///
/// ```
/// use mesh_io::{write_obj, MaterialLink};
/// use mesh_types::{IndexedMesh, Vertex};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 0.0, 0.0),
///         Vertex::from_coords(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// let mut out = Vec::new();
/// let link = MaterialLink { library: "seg_1.mtl", material: "SegmentMaterial_1" };
/// write_obj(&mesh, Some(link), &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("mtllib seg_1.mtl"));
/// assert_eq!(lines.next(), Some("usemtl SegmentMaterial_1"));
/// assert!(text.contains("f 1 2 3"));
/// ```
pub fn write_obj<W: Write>(
    mesh: &IndexedMesh,
    material: Option<MaterialLink<'_>>,
    mut writer: W,
) -> IoResult<()> {
    let mut body = Vec::with_capacity(32 * (mesh.vertices.len() + mesh.faces.len()) + 64);
    write_obj_body(mesh, &mut body)?;

    if let Some(link) = material {
        writeln!(writer, "mtllib {}", link.library)?;
        writeln!(writer, "usemtl {}", link.material)?;
    }
    writer.write_all(&body)?;
    writer.flush()?;

    Ok(())
}

/// Save a mesh to an OBJ file with no material.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::at_path(e, path))?;
    write_obj(mesh, None, BufWriter::new(file)).map_err(|e| match e {
        IoError::Io(source) => IoError::at_path(source, path),
        other => other,
    })
}

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`IoError::FileNotFound`])
/// - The file cannot be read
/// - A `v` or `f` statement is malformed, or a face references a vertex
///   that does not exist
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::at_path(e, path))?;
    let mesh = read_obj(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Loaded OBJ"
    );
    Ok(mesh)
}

/// Parse OBJ content from a reader.
///
/// # Errors
///
/// See [`load_obj`].
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut polygon: Vec<u32> = Vec::with_capacity(4);

    for (line_index, line) in reader.lines().enumerate() {
        let line_no = line_index + 1;
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let values = parts
                    .map(str::parse::<f64>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| IoError::invalid_content(line_no, format!("bad vertex: {e}")))?;
                let vertex = match values.as_slice() {
                    [x, y, z, r, g, b, ..] => {
                        Vertex::with_color(Point3::new(*x, *y, *z), Rgb::new(*r, *g, *b))
                    }
                    // x y z, optionally followed by a homogeneous w
                    [x, y, z] | [x, y, z, _] => Vertex::from_coords(*x, *y, *z),
                    _ => {
                        return Err(IoError::invalid_content(
                            line_no,
                            format!("expected 3, 4 or 6+ vertex values, found {}", values.len()),
                        ))
                    }
                };
                mesh.vertices.push(vertex);
            }
            Some("f") => {
                polygon.clear();
                for token in parts {
                    polygon.push(parse_face_index(token, mesh.vertices.len(), line_no)?);
                }
                if polygon.len() < 3 {
                    return Err(IoError::invalid_content(
                        line_no,
                        "face needs at least 3 vertices",
                    ));
                }
                for i in 1..polygon.len() - 1 {
                    mesh.faces.push([polygon[0], polygon[i], polygon[i + 1]]);
                }
            }
            _ => {
                // Comments, normals, texture coordinates, groups, materials
            }
        }
    }

    if let Some(face) = mesh.first_dangling_face() {
        return Err(IoError::invalid_content(
            0,
            format!(
                "face {face} references a vertex past the end ({} vertices)",
                mesh.vertices.len()
            ),
        ));
    }

    Ok(mesh)
}

/// Resolve one `f` token (`7`, `7/1`, `7//3`, `-1/2/3`) to a 0-based index.
fn parse_face_index(token: &str, vertex_count: usize, line_no: usize) -> IoResult<u32> {
    let raw = token.split('/').next().unwrap_or(token);
    let index: i64 = raw
        .parse()
        .map_err(|e| IoError::invalid_content(line_no, format!("bad face index '{token}': {e}")))?;

    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i - 1),
        // Negative indices count back from the most recent vertex
        i => i64::try_from(vertex_count).ok().map(|n| n + i),
    };

    resolved
        .filter(|&i| i >= 0)
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| IoError::invalid_content(line_no, format!("face index '{token}' out of range")))
}

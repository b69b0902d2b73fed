//! Wavefront MTL material libraries.

use std::io::Write;

use mesh_material::Material;
use mesh_types::Rgb;

use crate::error::IoResult;

/// Write a single-material MTL library.
///
/// ```text
/// newmtl SegmentMaterial_42
/// Kd 1.000000 0.500000 0.000000
/// Ka 1.000000 0.500000 0.000000
/// Ks 1.000000 1.000000 1.000000
/// Ns 1000
/// ```
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_mtl<W: Write>(material: &Material, mut writer: W) -> IoResult<()> {
    writeln!(writer, "newmtl {}", material.name)?;
    write_color(&mut writer, "Kd", material.diffuse)?;
    write_color(&mut writer, "Ka", material.ambient)?;
    write_color(&mut writer, "Ks", material.specular)?;
    writeln!(writer, "Ns {}", material.shininess)?;
    writer.flush()?;
    Ok(())
}

fn write_color<W: Write>(writer: &mut W, key: &str, c: Rgb) -> IoResult<()> {
    writeln!(writer, "{key} {:.6} {:.6} {:.6}", c.r, c.g, c.b)?;
    Ok(())
}

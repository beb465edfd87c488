//! # Attribute Writers
//!
//! Flatten the mesh's vertex buffers into the single-precision blocks the scene
//! file stores: positions, per-corner normals, uv sets and color sets.
//!
//! All writers are pure. A buffer in an unsupported storage type is only an
//! error when the writer actually needs values from it.

use config::constants::{
    color_representation, ImportConfig, MAX_COLOR_STRIDE, NORMAL_STRIDE, POSITION_STRIDE,
    REPRESENTATION_ALPHA, REPRESENTATION_RGB, REPRESENTATION_RGBA, UV_STRIDE,
};
use pipeline_types::{Diagnostic, Stage};
use scene_ir::{IrError, Mesh, VertexData};
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::error::{ImportError, ImportResult};

/// One uv set, flattened to `u v u v ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvSetBlock {
    /// Position of the set in the mesh's uv buffer.
    pub index: usize,
    pub name: String,
    pub values: Vec<f32>,
}

impl UvSetBlock {
    pub fn point_count(&self) -> usize {
        self.values.len() / UV_STRIDE
    }
}

/// How a color set's components are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorRepresentation {
    Alpha,
    Rgb,
    Rgba,
}

impl ColorRepresentation {
    pub fn from_stride(stride: usize) -> Self {
        match color_representation(stride) {
            REPRESENTATION_ALPHA => ColorRepresentation::Alpha,
            REPRESENTATION_RGB => ColorRepresentation::Rgb,
            _ => ColorRepresentation::Rgba,
        }
    }

    /// Numeric tag written to the scene file.
    pub fn tag(self) -> u32 {
        match self {
            ColorRepresentation::Alpha => REPRESENTATION_ALPHA,
            ColorRepresentation::Rgb => REPRESENTATION_RGB,
            ColorRepresentation::Rgba => REPRESENTATION_RGBA,
        }
    }
}

/// One color set with all of its source components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSetBlock {
    pub index: usize,
    pub name: String,
    pub stride: usize,
    pub representation: ColorRepresentation,
    pub values: Vec<f32>,
}

impl ColorSetBlock {
    pub fn color_count(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.values.len() / self.stride
        }
    }
}

/// Fails when `data` is in an unsupported storage type but values are needed.
fn require_readable(data: &VertexData, buffer: &'static str, needed: bool) -> ImportResult<()> {
    if needed && data.data_type() == scene_ir::DataType::Unknown {
        return Err(IrError::UnsupportedDataType {
            buffer,
            data_type: data.data_type(),
        }
        .into());
    }
    Ok(())
}

/// Vertex positions, converted to the host's linear unit and narrowed to f32.
pub fn write_positions(mesh: &Mesh, config: &ImportConfig) -> ImportResult<Vec<f32>> {
    let needs_positions = mesh
        .primitives
        .iter()
        .any(|primitive| !primitive.position_indices.is_empty());
    require_readable(&mesh.positions, "positions", needs_positions)?;

    let count = mesh.positions.len() / POSITION_STRIDE;
    let mut values = Vec::with_capacity(count * POSITION_STRIDE);
    for vertex in 0..count {
        let point = mesh.positions.point3("positions", vertex)? * config.linear_unit_scale;
        values.extend([point.x as f32, point.y as f32, point.z as f32]);
    }
    Ok(values)
}

/// Normals, one xyz triple per normal index occurrence.
///
/// The scene file binds normals per face corner, so shared normals are
/// duplicated rather than deduplicated. Line primitives are skipped.
pub fn write_normals(mesh: &Mesh) -> ImportResult<Vec<f32>> {
    let count = mesh.normals_count();
    require_readable(&mesh.normals, "normals", count > 0)?;

    let mut values = Vec::with_capacity(count * NORMAL_STRIDE);
    for primitive in mesh.primitives.iter().filter(|p| p.kind.is_surface()) {
        for &normal_index in &primitive.normal_indices {
            let base = normal_index as usize * NORMAL_STRIDE;
            for component in 0..NORMAL_STRIDE {
                values.push(mesh.normals.values.get_f32("normals", base + component)?);
            }
        }
    }
    Ok(values)
}

/// All uv sets in source order, truncated to two components per point.
pub fn write_uv_sets(
    mesh: &Mesh,
    diagnostics: &mut Diagnostics,
) -> ImportResult<Vec<UvSetBlock>> {
    let uvs = &mesh.uv_coords;
    require_readable(uvs, "uv coordinates", uvs.input_count() > 0)?;

    let mut blocks = Vec::with_capacity(uvs.input_count());
    for (index, input) in uvs.inputs.iter().enumerate() {
        if input.stride < UV_STRIDE {
            return Err(ImportError::InvalidStride {
                buffer: "uv",
                set: input.name.clone(),
                stride: input.stride,
            });
        }
        if input.stride != UV_STRIDE {
            diagnostics.push(
                Diagnostic::warning(Stage::Attributes, "Just 2d uv set data will be imported!")
                    .with_subject(mesh.label())
                    .with_hint(format!("set '{}' has stride {}", input.name, input.stride)),
            );
        }

        let offset = uvs.input_offset(index);
        let points = input.length / input.stride;
        let mut values = Vec::with_capacity(points * UV_STRIDE);
        for point in 0..points {
            let base = offset + point * input.stride;
            values.push(uvs.values.get_f32("uv coordinates", base)?);
            values.push(uvs.values.get_f32("uv coordinates", base + 1)?);
        }

        blocks.push(UvSetBlock {
            index,
            name: input.name.clone(),
            values,
        });
    }
    Ok(blocks)
}

/// All color sets in source order, with every component kept.
pub fn write_color_sets(mesh: &Mesh) -> ImportResult<Vec<ColorSetBlock>> {
    let colors = &mesh.colors;
    require_readable(colors, "colors", colors.input_count() > 0)?;

    if colors.inputs.is_empty() {
        return Ok(Vec::new());
    }

    let narrowed = colors.values.narrowed("colors")?;
    let mut blocks = Vec::with_capacity(colors.input_count());
    for (index, input) in colors.inputs.iter().enumerate() {
        if input.stride == 0 || input.stride > MAX_COLOR_STRIDE {
            return Err(ImportError::InvalidStride {
                buffer: "color",
                set: input.name.clone(),
                stride: input.stride,
            });
        }

        let offset = colors.input_offset(index);
        let used = input.length - input.length % input.stride;
        let values = narrowed
            .get(offset..offset + used)
            .ok_or(IrError::IndexOutOfRange {
                what: "colors",
                index: (offset + used).saturating_sub(1),
                len: narrowed.len(),
            })?
            .to_vec();

        blocks.push(ColorSetBlock {
            index,
            name: input.name.clone(),
            stride: input.stride,
            representation: ColorRepresentation::from_stride(input.stride),
            values,
        });
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests;

//! Tests for the attribute writers.

use approx::assert_relative_eq;
use config::constants::ImportConfig;
use scene_ir::{MeshPrimitive, PrimitiveKind, UniqueId, VertexData, VertexValues};

use super::*;

fn triangle(positions: VertexData) -> Mesh {
    Mesh::new(UniqueId(7), "tri")
        .with_positions(positions)
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::Triangles, vec![0, 1, 2])
                .with_normal_indices(vec![0, 0, 1]),
        )
}

const TRIANGLE_F64: [f64; 9] = [0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 0.0, 2.25, 0.1];

// =============================================================================
// POSITIONS
// =============================================================================

#[test]
fn test_double_positions_narrow_like_float_positions() {
    let config = ImportConfig::default();
    let from_double =
        write_positions(&triangle(VertexData::double(TRIANGLE_F64.to_vec())), &config).unwrap();
    let from_float = write_positions(
        &triangle(VertexData::float(TRIANGLE_F64.iter().map(|v| *v as f32).collect())),
        &config,
    )
    .unwrap();
    assert_eq!(from_double.len(), 9);
    for (a, b) in from_double.iter().zip(&from_float) {
        assert_relative_eq!(*a, *b);
    }
}

#[test]
fn test_positions_are_scaled_to_host_unit() {
    let config = ImportConfig::new(0.01, true).unwrap();
    let values =
        write_positions(&triangle(VertexData::double(TRIANGLE_F64.to_vec())), &config).unwrap();
    assert_relative_eq!(values[3], 0.015);
    assert_relative_eq!(values[7], 0.0225);
}

#[test]
fn test_unknown_position_type_is_fatal_when_indexed() {
    let mesh = triangle(VertexData::default());
    let err = write_positions(&mesh, &ImportConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Data(IrError::UnsupportedDataType { buffer: "positions", .. })
    ));
}

#[test]
fn test_unknown_position_type_is_ignored_without_indices() {
    let mesh = Mesh::new(UniqueId(1), "empty");
    assert!(write_positions(&mesh, &ImportConfig::default()).unwrap().is_empty());
}

// =============================================================================
// NORMALS
// =============================================================================

#[test]
fn test_normals_are_written_per_corner() {
    let mesh = triangle(VertexData::double(TRIANGLE_F64.to_vec()))
        .with_normals(VertexData::double(vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0]));
    let values = write_normals(&mesh).unwrap();
    assert_eq!(values, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_normal_index_out_of_range_is_fatal() {
    let mesh = triangle(VertexData::double(TRIANGLE_F64.to_vec()))
        .with_normals(VertexData::float(vec![0.0, 0.0, 1.0]));
    assert!(matches!(
        write_normals(&mesh),
        Err(ImportError::Data(IrError::IndexOutOfRange { .. }))
    ));
}

#[test]
fn test_no_normal_indices_means_no_normals() {
    let mesh = Mesh::new(UniqueId(1), "bare").with_primitive(MeshPrimitive::new(
        PrimitiveKind::Triangles,
        vec![0, 1, 2],
    ));
    assert!(write_normals(&mesh).unwrap().is_empty());
}

// =============================================================================
// UV SETS
// =============================================================================

#[test]
fn test_uv_sets_are_split_by_input() {
    let uvs = VertexData::float(vec![0.0, 0.0, 1.0, 0.0, 0.5, 0.5, 0.25, 0.75])
        .with_input("map1", 2, 4)
        .with_input("map2", 2, 4);
    let mesh = Mesh::new(UniqueId(1), "uv").with_uv_coords(uvs);
    let mut diagnostics = Diagnostics::new();

    let blocks = write_uv_sets(&mesh, &mut diagnostics).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].name, "map2");
    assert_eq!(blocks[1].index, 1);
    assert_eq!(blocks[1].values, vec![0.5, 0.5, 0.25, 0.75]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_three_component_uvs_keep_first_two_and_warn() {
    let uvs = VertexData::double(vec![0.1, 0.2, 0.9, 0.3, 0.4, 0.9]).with_input("map1", 3, 6);
    let mesh = Mesh::new(UniqueId(1), "uvw").with_uv_coords(uvs);
    let mut diagnostics = Diagnostics::new();

    let blocks = write_uv_sets(&mesh, &mut diagnostics).unwrap();
    assert_eq!(blocks[0].point_count(), 2);
    assert_relative_eq!(blocks[0].values[2], 0.3);
    assert_relative_eq!(blocks[0].values[3], 0.4);
    assert_eq!(diagnostics.warnings().count(), 1);

    let warning = &diagnostics.entries()[0];
    assert_eq!(warning.subject.as_deref(), Some("uvw"));
    assert_eq!(warning.hint.as_deref(), Some("set 'map1' has stride 3"));
}

#[test]
fn test_one_component_uvs_are_rejected() {
    let uvs = VertexData::float(vec![0.1, 0.2]).with_input("u_only", 1, 2);
    let mesh = Mesh::new(UniqueId(1), "u").with_uv_coords(uvs);
    let err = write_uv_sets(&mesh, &mut Diagnostics::new()).unwrap_err();
    assert!(matches!(err, ImportError::InvalidStride { stride: 1, .. }));
}

// =============================================================================
// COLOR SETS
// =============================================================================

#[test]
fn test_color_representation_follows_stride() {
    let colors = VertexData::float(vec![
        1.0, 0.0, 0.0, // rgb
        0.5, // alpha
        0.0, 1.0, 0.0, 1.0, // rgba
    ])
    .with_input("rgb", 3, 3)
    .with_input("alpha", 1, 1)
    .with_input("rgba", 4, 4);
    let mesh = Mesh::new(UniqueId(1), "painted").with_colors(colors);

    let blocks = write_color_sets(&mesh).unwrap();
    let representations: Vec<_> = blocks.iter().map(|b| b.representation).collect();
    assert_eq!(
        representations,
        vec![
            ColorRepresentation::Rgb,
            ColorRepresentation::Alpha,
            ColorRepresentation::Rgba
        ]
    );
    assert_eq!(blocks[2].values, vec![0.0, 1.0, 0.0, 1.0]);
    assert_eq!(blocks[2].color_count(), 1);
    assert_eq!(blocks[0].representation.tag(), 3);
}

#[test]
fn test_double_colors_are_narrowed_per_set() {
    let colors = VertexData::double(vec![0.25, 0.5, 0.75, 1.0, 0.125, 0.0, 0.0])
        .with_input("rgba", 4, 4)
        .with_input("rgb", 3, 3);
    let mesh = Mesh::new(UniqueId(1), "painted").with_colors(colors);

    let blocks = write_color_sets(&mesh).unwrap();
    assert_eq!(blocks[0].values, vec![0.25f32, 0.5, 0.75, 1.0]);
    assert_eq!(blocks[1].values, vec![0.125f32, 0.0, 0.0]);
}

#[test]
fn test_color_set_past_buffer_end_is_fatal() {
    let colors = VertexData::float(vec![1.0, 0.0, 0.0]).with_input("rgb", 3, 6);
    let mesh = Mesh::new(UniqueId(1), "short").with_colors(colors);
    assert!(matches!(
        write_color_sets(&mesh),
        Err(ImportError::Data(IrError::IndexOutOfRange { what: "colors", len: 3, .. }))
    ));
}

#[test]
fn test_two_component_colors_are_rgba() {
    assert_eq!(ColorRepresentation::from_stride(2), ColorRepresentation::Rgba);
}

#[test]
fn test_oversized_color_stride_is_rejected() {
    let colors = VertexData::float(vec![0.0; 5]).with_input("wide", 5, 5);
    let mesh = Mesh::new(UniqueId(1), "wide").with_colors(colors);
    assert!(matches!(
        write_color_sets(&mesh),
        Err(ImportError::InvalidStride { buffer: "color", stride: 5, .. })
    ));
}

#[test]
fn test_unknown_color_type_with_inputs_is_fatal() {
    let colors = VertexData {
        values: VertexValues::Unknown,
        inputs: Vec::new(),
    }
    .with_input("col", 3, 3);
    let mesh = Mesh::new(UniqueId(1), "col").with_colors(colors);
    assert!(write_color_sets(&mesh).is_err());
}

//! Scene-file command writer.
//!
//! Emits the ASCII command form of the mesh blocks, one command per node or
//! attribute, values grouped one tuple per line.

use std::fmt::Display;
use std::io::Write;

use super::{EdgeRecord, MeshSink, ParentShape};
use crate::attributes::{ColorSetBlock, UvSetBlock};
use crate::context::FaceRange;
use crate::error::SinkError;
use crate::faces::{FaceRecord, SetIndices};
use crate::topology::SignedEdge;

/// Writes scene-file commands to `out`.
///
/// # Examples
/// ```
/// use mesh_import::sink::{AsciiWriter, MeshSink};
/// let mut writer = AsciiWriter::new(Vec::new());
/// writer.create_mesh_node("Geometry", "|pCube1").unwrap();
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "createNode mesh -n \"Geometry\" -p \"|pCube1\";\n");
/// ```
#[derive(Debug)]
pub struct AsciiWriter<W: Write> {
    out: W,
}

impl<W: Write> AsciiWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `setAttr -s N "<attr>[0:N-1]" <type>` followed by one tuple per line.
    fn write_tuples<T: Display>(
        &mut self,
        attr: &str,
        data_type: Option<&str>,
        values: &[T],
        tuple: usize,
    ) -> Result<(), SinkError> {
        if tuple == 0 || values.len() < tuple {
            return Ok(());
        }
        let count = values.len() / tuple;
        write!(self.out, "\tsetAttr -s {count} \"{attr}[0:{}]\"", count - 1)?;
        if let Some(data_type) = data_type {
            write!(self.out, " -type \"{data_type}\"")?;
        }
        for chunk in values.chunks_exact(tuple) {
            write!(self.out, "\n\t\t")?;
            write_joined(&mut self.out, chunk)?;
        }
        writeln!(self.out, ";")?;
        Ok(())
    }

    fn write_loop(
        &mut self,
        tag: char,
        edges: &[SignedEdge],
        uvs: &[SetIndices],
        colors: &[SetIndices],
    ) -> Result<(), SinkError> {
        write!(self.out, "\n\t\t{tag} {} ", edges.len())?;
        let raw: Vec<i32> = edges.iter().map(|edge| edge.raw()).collect();
        write_joined(&mut self.out, &raw)?;
        for set in uvs {
            write!(self.out, "\n\t\tmu {} {} ", set.set, set.indices.len())?;
            write_joined(&mut self.out, &set.indices)?;
        }
        for set in colors {
            write!(self.out, "\n\t\tmc {} {} ", set.set, set.indices.len())?;
            write_joined(&mut self.out, &set.indices)?;
        }
        Ok(())
    }
}

fn write_joined<T: Display>(out: &mut impl Write, values: &[T]) -> std::io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{value}")?;
    }
    Ok(())
}

/// Quotes a string argument, escaping quotes and backslashes.
fn quoted(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            result.push('\\');
        }
        result.push(ch);
    }
    result.push('"');
    result
}

impl<W: Write> MeshSink for AsciiWriter<W> {
    fn create_mesh_node(&mut self, name: &str, parent_path: &str) -> Result<(), SinkError> {
        writeln!(
            self.out,
            "createNode mesh -n {} -p {};",
            quoted(name),
            quoted(parent_path)
        )?;
        Ok(())
    }

    fn set_object_group(
        &mut self,
        instance: usize,
        group: usize,
        faces: FaceRange,
    ) -> Result<(), SinkError> {
        writeln!(
            self.out,
            "\tsetAttr \".iog[{instance}].og[{group}].gcl\" -type \"componentList\" 1 {};",
            quoted(&faces.component())
        )?;
        Ok(())
    }

    fn write_positions(&mut self, values: &[f32]) -> Result<(), SinkError> {
        self.write_tuples(".vt", None, values, 3)
    }

    fn write_normals(&mut self, values: &[f32]) -> Result<(), SinkError> {
        self.write_tuples(".n", Some("float3"), values, 3)
    }

    fn write_uv_set(&mut self, block: &UvSetBlock) -> Result<(), SinkError> {
        let index = block.index;
        writeln!(
            self.out,
            "\tsetAttr \".uvst[{index}].uvsn\" -type \"string\" {};",
            quoted(&block.name)
        )?;
        self.write_tuples(&format!(".uvst[{index}].uvsp"), Some("float2"), &block.values, 2)
    }

    fn write_color_set(&mut self, block: &ColorSetBlock) -> Result<(), SinkError> {
        let index = block.index;
        writeln!(
            self.out,
            "\tsetAttr \".clst[{index}].clsn\" -type \"string\" {};",
            quoted(&block.name)
        )?;
        writeln!(
            self.out,
            "\tsetAttr \".clst[{index}].rprt\" {};",
            block.representation.tag()
        )?;
        self.write_tuples(&format!(".clst[{index}].clsp"), None, &block.values, block.stride)
    }

    fn write_edges(&mut self, edges: &[EdgeRecord]) -> Result<(), SinkError> {
        let values: Vec<u32> = edges
            .iter()
            .flat_map(|edge| [edge.start, edge.end, u32::from(!edge.hard)])
            .collect();
        self.write_tuples(".ed", None, &values, 3)
    }

    fn write_faces(&mut self, faces: &[FaceRecord]) -> Result<(), SinkError> {
        if faces.is_empty() {
            return Ok(());
        }
        write!(
            self.out,
            "\tsetAttr -s {} \".fc[0:{}]\" -type \"polyFaces\"",
            faces.len(),
            faces.len() - 1
        )?;
        for face in faces {
            self.write_loop('f', &face.edges, &face.uvs, &face.colors)?;
            for hole in &face.holes {
                self.write_loop('h', &hole.edges, &hole.uvs, &hole.colors)?;
            }
        }
        writeln!(self.out, ";")?;
        Ok(())
    }

    fn parent_shape(&mut self, directive: &ParentShape) -> Result<(), SinkError> {
        write!(self.out, "parent -s")?;
        if directive.no_connections {
            write!(self.out, " -nc")?;
        }
        if directive.relative {
            write!(self.out, " -r")?;
        }
        if directive.add_object {
            write!(self.out, " -add")?;
        }
        writeln!(
            self.out,
            " {} {};",
            quoted(&directive.source),
            quoted(&directive.destination)
        )?;
        Ok(())
    }

    fn create_group_id(&mut self, name: &str) -> Result<(), SinkError> {
        writeln!(self.out, "createNode groupId -n {};", quoted(name))?;
        Ok(())
    }
}

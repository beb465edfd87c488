//! # Vertex Data
//!
//! Flat attribute buffers stored either in single or double precision.
//! The storage type is only known at runtime, so reads go through a single
//! narrowing accessor instead of branching at every call site.

use std::borrow::Cow;

use config::constants::POSITION_STRIDE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};

/// Storage type tag of a [`VertexValues`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Float,
    Double,
    Unknown,
}

/// Tagged dual-precision value storage.
///
/// # Examples
/// ```
/// use scene_ir::VertexValues;
/// let values = VertexValues::Double(vec![0.5, 1.25]);
/// assert_eq!(values.get_f32("positions", 1).unwrap(), 1.25f32);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum VertexValues {
    Float(Vec<f32>),
    Double(Vec<f64>),
    /// Storage the loader could not classify. Holds no readable values.
    #[default]
    Unknown,
}

impl VertexValues {
    /// Returns the storage type tag.
    pub fn data_type(&self) -> DataType {
        match self {
            VertexValues::Float(_) => DataType::Float,
            VertexValues::Double(_) => DataType::Double,
            VertexValues::Unknown => DataType::Unknown,
        }
    }

    /// Number of scalar values stored.
    pub fn len(&self) -> usize {
        match self {
            VertexValues::Float(values) => values.len(),
            VertexValues::Double(values) => values.len(),
            VertexValues::Unknown => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads one value at full precision.
    ///
    /// `buffer` names the attribute for error messages.
    pub fn get_f64(&self, buffer: &'static str, index: usize) -> IrResult<f64> {
        let value = match self {
            VertexValues::Float(values) => values.get(index).map(|v| f64::from(*v)),
            VertexValues::Double(values) => values.get(index).copied(),
            VertexValues::Unknown => {
                return Err(IrError::UnsupportedDataType {
                    buffer,
                    data_type: DataType::Unknown,
                })
            }
        };
        value.ok_or(IrError::IndexOutOfRange {
            what: buffer,
            index,
            len: self.len(),
        })
    }

    /// Reads one value narrowed to single precision.
    pub fn get_f32(&self, buffer: &'static str, index: usize) -> IrResult<f32> {
        match self {
            VertexValues::Float(values) => {
                values
                    .get(index)
                    .copied()
                    .ok_or(IrError::IndexOutOfRange {
                        what: buffer,
                        index,
                        len: values.len(),
                    })
            }
            _ => self.get_f64(buffer, index).map(|v| v as f32),
        }
    }

    /// Returns the whole buffer narrowed to single precision.
    ///
    /// Float storage is borrowed, double storage is converted.
    pub fn narrowed(&self, buffer: &'static str) -> IrResult<Cow<'_, [f32]>> {
        match self {
            VertexValues::Float(values) => Ok(Cow::Borrowed(values.as_slice())),
            VertexValues::Double(values) => {
                Ok(Cow::Owned(values.iter().map(|v| *v as f32).collect()))
            }
            VertexValues::Unknown => Err(IrError::UnsupportedDataType {
                buffer,
                data_type: DataType::Unknown,
            }),
        }
    }
}

/// Description of one named input set inside a [`VertexData`] buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    pub name: String,
    /// Components per element.
    pub stride: usize,
    /// Number of scalar values the set occupies.
    pub length: usize,
}

/// A flat attribute buffer plus the named input sets laid out in it.
///
/// Input sets are stored back to back in declaration order, so the values of
/// set `i` start at the sum of the lengths of all sets before it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VertexData {
    pub values: VertexValues,
    pub inputs: Vec<InputInfo>,
}

impl VertexData {
    /// Creates a single-precision buffer without input sets.
    pub fn float(values: Vec<f32>) -> Self {
        Self {
            values: VertexValues::Float(values),
            inputs: Vec::new(),
        }
    }

    /// Creates a double-precision buffer without input sets.
    pub fn double(values: Vec<f64>) -> Self {
        Self {
            values: VertexValues::Double(values),
            inputs: Vec::new(),
        }
    }

    /// Appends a named input set description.
    ///
    /// # Examples
    /// ```
    /// use scene_ir::VertexData;
    /// let uvs = VertexData::float(vec![0.0; 10])
    ///     .with_input("map1", 2, 8)
    ///     .with_input("map2", 2, 2);
    /// assert_eq!(uvs.input_offset(1), 8);
    /// assert_eq!(uvs.input_index("map2"), Some(1));
    /// ```
    pub fn with_input(mut self, name: impl Into<String>, stride: usize, length: usize) -> Self {
        self.inputs.push(InputInfo {
            name: name.into(),
            stride,
            length,
        });
        self
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.values.data_type()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Offset of the first value of input set `input` within the buffer.
    pub fn input_offset(&self, input: usize) -> usize {
        self.inputs.iter().take(input).map(|info| info.length).sum()
    }

    /// Position of the input set called `name`, if any.
    pub fn input_index(&self, name: &str) -> Option<usize> {
        self.inputs.iter().position(|info| info.name == name)
    }

    /// Reads the 3-component tuple at `index` (stride 3) at full precision.
    pub fn point3(&self, buffer: &'static str, index: usize) -> IrResult<DVec3> {
        let base = index * POSITION_STRIDE;
        Ok(DVec3::new(
            self.values.get_f64(buffer, base)?,
            self.values.get_f64(buffer, base + 1)?,
            self.values.get_f64(buffer, base + 2)?,
        ))
    }
}

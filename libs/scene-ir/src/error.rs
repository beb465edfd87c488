//! # Scene IR Errors
//!
//! Errors raised when reading values out of the interchange model.

use thiserror::Error;

use crate::vertex_data::DataType;

/// Errors that can occur while reading interchange data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IrError {
    /// A buffer holds values in a storage type the importer cannot read.
    #[error("No valid data type for {buffer}: {data_type:?}")]
    UnsupportedDataType {
        buffer: &'static str,
        data_type: DataType,
    },

    /// An index points past the end of a buffer or index list.
    #[error("Index {index} out of range for {what} (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// An index value lies below the initial index of its list.
    #[error("Index value {value} of input '{input}' is below its initial index {initial}")]
    BelowInitialIndex {
        input: String,
        value: u32,
        initial: u32,
    },
}

/// Result type alias for reads from the interchange model.
pub type IrResult<T> = Result<T, IrError>;

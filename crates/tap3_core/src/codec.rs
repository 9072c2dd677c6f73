//! Seam to the interchange codec.
//!
//! BER/DER encoding of TAP input and RAP output belongs to an external codec
//! library; the validator only needs these two capabilities. `JsonCodec` is
//! the fixture implementation used by tests and the CLI, carrying the same
//! tree shapes in JSON.

use std::io::Write;

use thiserror::Error;

use crate::models::rap::ReturnBatch;
use crate::models::tap::DataInterchange;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed interchange: {0}")]
    Malformed(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// Mirrors the codec's failure report: the name of the type descriptor the
// encoder stopped at.
#[derive(Debug, Error)]
#[error("error while encoding return batch at type {failed_type}")]
pub struct EncodeError {
    pub failed_type: String,
}

pub trait TapDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DataInterchange, DecodeError>;
}

pub trait RapEncoder {
    /// Encodes the batch into `out`, returning the number of bytes written.
    fn encode(&self, batch: &ReturnBatch, out: &mut dyn Write) -> Result<usize, EncodeError>;
}

/// JSON rendition of the interchange trees, for fixtures and local tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl TapDecoder for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DataInterchange, DecodeError> {
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}

impl RapEncoder for JsonCodec {
    fn encode(&self, batch: &ReturnBatch, out: &mut dyn Write) -> Result<usize, EncodeError> {
        let encoded = serde_json::to_vec_pretty(batch).map_err(|_| EncodeError {
            failed_type: "ReturnBatch".to_string(),
        })?;
        out.write_all(&encoded).map_err(|_| EncodeError {
            failed_type: "ReturnBatch".to_string(),
        })?;
        Ok(encoded.len())
    }
}

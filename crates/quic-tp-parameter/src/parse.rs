use std::{
    borrow::Cow,
    io::{Cursor, Read},
    iter::FusedIterator,
};

use quic_tp_common::{display_name, KnownParameter, ReadVarInt, ReadVarIntError};
use tracing::{instrument, trace};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TransportParameter {
    id: u64,
    payload: Vec<u8>,
}

impl TransportParameter {
    pub fn new(id: u64, payload: Vec<u8>) -> Self {
        Self { id, payload }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn known(&self) -> Option<KnownParameter> {
        KnownParameter::from_id(self.id)
    }

    pub fn name(&self) -> Cow<'static, str> {
        display_name(self.id)
    }
}

/// Reads one `(id, length, payload)` record and leaves `input` right after it.
#[instrument(skip(input), name = "read transport parameter", level = "trace")]
pub fn read_parameter(
    input: &mut Cursor<&[u8]>,
) -> Result<TransportParameter, ParseParameterError> {
    let id = input
        .read_var_int()
        .map_err(ParseParameterError::TruncatedParameterId)?
        .u64();
    let length = input
        .read_var_int()
        .map_err(|source| ParseParameterError::TruncatedParameterLength {
            name: display_name(id).into_owned(),
            source,
        })?
        .u64();
    trace!(id, length, "read parameter header");

    if length == 0 {
        return Ok(TransportParameter::new(id, Vec::new()));
    }

    // checked before allocating, the declared length may be up to 2^62 - 1
    let available = remaining(input);
    if length > available as u64 {
        return Err(ParseParameterError::PayloadLengthMismatch {
            name: display_name(id).into_owned(),
            expected: length,
            actual: available,
        });
    }

    let mut payload = vec![0; length as usize];
    input.read_exact(&mut payload)?;
    Ok(TransportParameter::new(id, payload))
}

fn remaining(input: &Cursor<&[u8]>) -> usize {
    input
        .get_ref()
        .len()
        .saturating_sub(input.position() as usize)
}

/// Streaming decoder over a buffer of transport parameters.
///
/// Yields records in input order. After the first error nothing more is
/// yielded.
#[derive(Debug, Clone)]
pub struct Parameters<'a> {
    input: Cursor<&'a [u8]>,
    failed: bool,
}

impl<'a> Parameters<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            input: Cursor::new(bytes),
            failed: false,
        }
    }
}

impl<'a> Iterator for Parameters<'a> {
    type Item = Result<TransportParameter, ParseParameterError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || remaining(&self.input) == 0 {
            return None;
        }
        let parameter = read_parameter(&mut self.input);
        if parameter.is_err() {
            self.failed = true;
        }
        Some(parameter)
    }
}

impl<'a> FusedIterator for Parameters<'a> {}

/// Decodes the whole buffer, failing without any record on the first error.
pub fn parse_from_bytes(bytes: &[u8]) -> Result<Vec<TransportParameter>, ParseParameterError> {
    Parameters::new(bytes).collect()
}

#[derive(thiserror::Error, Debug)]
pub enum ParseParameterError {
    #[error("failed to read parameter id: {0}")]
    TruncatedParameterId(#[source] ReadVarIntError),
    #[error("failed to read parameter length of {name}: {source}")]
    TruncatedParameterLength {
        name: String,
        #[source]
        source: ReadVarIntError,
    },
    #[error("invalid length of {name}: expected {expected} bytes, only {actual} available")]
    PayloadLengthMismatch {
        name: String,
        expected: u64,
        actual: usize,
    },
    #[error("std I/O error")]
    StdIo(#[from] std::io::Error),
}

use std::{borrow::Cow, fmt, io::Cursor};

use quic_tp_common::{ReadVarInt, ReadVarIntError};

use crate::parse::TransportParameter;

/// A parameter turned into its `"<name>, <value>"` form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RenderedParameter {
    name: Cow<'static, str>,
    value: String,
}

impl RenderedParameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for RenderedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.value)
    }
}

pub fn render(parameter: &TransportParameter) -> Result<RenderedParameter, RenderError> {
    Ok(RenderedParameter {
        name: parameter.name(),
        value: render_value(parameter)?,
    })
}

/// Var int valued parameters are shown as a decimal number, everything else,
/// unknown parameters included, as the raw byte list.
pub fn render_value(parameter: &TransportParameter) -> Result<String, RenderError> {
    match parameter.known() {
        Some(known) if known.is_var_int_valued() => read_single_var_int(parameter.payload())
            .map(|value| value.to_string())
            .map_err(|source| RenderError::MalformedKnownValue {
                name: known.name(),
                source,
            }),
        _ => Ok(format!("{:?}", parameter.payload())),
    }
}

fn read_single_var_int(payload: &[u8]) -> Result<u64, MalformedValue> {
    if payload.is_empty() {
        return Err(MalformedValue::Empty);
    }
    let mut input = Cursor::new(payload);
    let (var_int, length) = input.read_var_int_with_len()?;
    if length < payload.len() {
        return Err(MalformedValue::TrailingBytes {
            trailing: payload.len() - length,
        });
    }
    Ok(var_int.u64())
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("malformed value of {name}: {source}")]
    MalformedKnownValue {
        name: &'static str,
        #[source]
        source: MalformedValue,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum MalformedValue {
    #[error("empty payload")]
    Empty,
    #[error("{0}")]
    VarInt(#[from] ReadVarIntError),
    #[error("{trailing} trailing bytes after the var int")]
    TrailingBytes { trailing: usize },
}

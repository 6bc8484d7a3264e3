//! Decoder for the QUIC transport parameters extension (RFC 9000 section 18).
pub mod parse;
pub mod render;

use std::iter::FusedIterator;

pub use parse::{
    parse_from_bytes, read_parameter, ParseParameterError, Parameters, TransportParameter,
};
pub use render::{render, render_value, MalformedValue, RenderError, RenderedParameter};

/// Decodes and renders each parameter as it is read.
///
/// Lines for parameters before a failing one are yielded first, then the
/// error, then nothing.
pub fn lines(bytes: &[u8]) -> Lines<'_> {
    Lines {
        parameters: Parameters::new(bytes),
        failed: false,
    }
}

/// Decodes and renders the whole buffer; on error no line is returned.
pub fn render_all(bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    lines(bytes).collect()
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
    parameters: Parameters<'a>,
    failed: bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<String, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = self
            .parameters
            .next()?
            .map_err(DecodeError::from)
            .and_then(|parameter| Ok(render(&parameter)?.to_string()));
        if line.is_err() {
            self.failed = true;
        }
        Some(line)
    }
}

impl<'a> FusedIterator for Lines<'a> {}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Parse(#[from] ParseParameterError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests;

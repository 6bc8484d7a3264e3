#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("std I/O Error")]
    StdIo(#[from] std::io::Error),
    #[error("serde json error")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("hex input error")]
    FromHexError(#[from] hex::FromHexError),
    #[error("read var int error")]
    ReadVarIntError(#[from] quic_tp_common::ReadVarIntError),
    #[error("transport parameters decode error")]
    DecodeError(#[from] quic_tp_parameter::DecodeError),
    #[error("unknown transport parameter name: {0}")]
    UnknownParameterName(String),
}

pub mod transport_parameter;
pub mod var_int;

pub use transport_parameter::{display_name, KnownParameter};
pub use var_int::{ReadVarInt, ReadVarIntError, VarInt};

use std::io::Cursor;

use clap::Parser;
use quic_tp_common::ReadVarInt;

use crate::error::Error;

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {
    /// bytes as a JSON list, e.g. [64,37]
    #[clap(value_parser)]
    byte_list: String,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        let bytes: Vec<u8> = serde_json::from_str(&self.byte_list)?;
        let mut input = Cursor::new(&bytes);
        let (var_int, length) = input.read_var_int_with_len()?;
        println!("{} ({} bytes)", var_int.u64(), length);
        Ok(())
    }
}

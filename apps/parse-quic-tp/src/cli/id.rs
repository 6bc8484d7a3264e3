use clap::Parser;
use quic_tp_common::KnownParameter;

use crate::error::Error;

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {
    /// transport parameter name, e.g. max_idle_timeout
    #[clap(value_parser)]
    name: String,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        let parameter = KnownParameter::from_name(&self.name)
            .ok_or(Error::UnknownParameterName(self.name))?;
        println!("{:#04x}", parameter.id());
        Ok(())
    }
}

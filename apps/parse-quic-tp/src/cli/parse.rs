use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::error::Error;

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {
    /// input is hexadecimal text, whitespace is ignored
    #[clap(long)]
    hex: bool,
    /// read from this file instead of stdin
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,
}

impl Cli {
    #[instrument(skip(self), name = "parse transport parameters", level = "info")]
    pub fn run(&self) -> Result<(), Error> {
        let bytes = self.read_input()?;

        info!("read transport parameters: {:?}", bytes);

        // printed as soon as each parameter is decoded, an error stops the output
        let stdout = io::stdout();
        let mut output = stdout.lock();
        for line in quic_tp_parameter::lines(&bytes) {
            let line = line?;
            debug!("{}", line);
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }

    fn read_input(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        match &self.input {
            Some(path) => File::open(path)?.read_to_end(&mut buf)?,
            None => io::stdin().read_to_end(&mut buf)?,
        };
        if self.hex {
            decode_hex(&buf)
        } else {
            Ok(buf)
        }
    }
}

fn decode_hex(text: &[u8]) -> Result<Vec<u8>, Error> {
    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(hex::decode(digits)?)
}

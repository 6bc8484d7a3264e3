use clap::{Parser, Subcommand};
use tracing::instrument;

mod id;
mod parse;
mod var_int;

#[derive(Parser, Debug, PartialEq, Clone)]
#[clap(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,
    // used when no subcommand is given
    #[clap(flatten)]
    pub parse: parse::Cli,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// parsing transport parameters
    Parse(parse::Cli),
    VarInt(var_int::Cli),
    /// look up the id of a transport parameter name
    Id(id::Cli),
}

impl Cli {
    #[instrument(skip(self), name = "first command", level = "trace")]
    pub fn run(self) -> Result<(), anyhow::Error> {
        match self.command {
            Some(Commands::Parse(cli)) => cli.run()?,
            Some(Commands::VarInt(cli)) => cli.run()?,
            Some(Commands::Id(cli)) => cli.run()?,
            None => self.parse.run()?,
        }
        Ok(())
    }
}

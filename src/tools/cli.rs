use std::fmt::{Display, Formatter};

use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};

/// Compress or Decompress
#[derive(Debug)]
pub enum Mode {
    Compress,
    Decompress,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Everything the drivers need to know about this invocation.
#[derive(Debug)]
pub struct MidOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Name of the file to read
    pub input: String,
    /// Name of the file to write
    pub output: String,
}

/// Command line interpretation - uses the external clap crate.
#[derive(Parser, Debug)]
#[command(
    name = "middle_out",
    version,
    about = "A middle-out file compressor: LZ77 parsing over a rANS entropy coder",
    long_about = None)]
struct Args {
    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress INPUT into a middle_out container at OUTPUT
    Compress { input: String, output: String },

    /// Recover the original bytes of a container at INPUT into OUTPUT
    Decompress { input: String, output: String },
}

/// Parse the command line into our internal options structure and set
/// the log level from the -v count.
pub fn midopts_init() -> MidOpts {
    let args = Args::parse();

    match args.verbose {
        0 => log::set_max_level(LevelFilter::Warn),
        1 => log::set_max_level(LevelFilter::Info),
        2 => log::set_max_level(LevelFilter::Debug),
        _ => log::set_max_level(LevelFilter::Trace),
    };

    let opts = match args.command {
        Command::Compress { input, output } => MidOpts {
            op_mode: Mode::Compress,
            input,
            output,
        },
        Command::Decompress { input, output } => MidOpts {
            op_mode: Mode::Decompress,
            input,
            output,
        },
    };

    info!("Operational mode set to {}", opts.op_mode);
    info!("Reading {}, writing {}", opts.input, opts.output);
    opts
}

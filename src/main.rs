//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use middle_out::compression::compress::compress;
use middle_out::compression::decompress::decompress;
use middle_out::tools::cli::{midopts_init, Mode};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The
    // cli module narrows this down from the -v count.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let opts = midopts_init();

    //----- Figure out what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Compress => compress(&opts),
        Mode::Decompress => decompress(&opts),
    };

    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
    info!("Done.");
}

use std::fs;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::compression::container::{Header, HEADER_SIZE};
use crate::error::{Error, Result};
use crate::lz77::parser;
use crate::rans_coding::model::ByteModel;
use crate::rans_coding::rans::RansEncoder;
use crate::tools::cli::MidOpts;

/// Compress the input file named in opts (MidOpts) into a container at
/// the output path. An empty input produces no output file at all.
pub fn compress(opts: &MidOpts) -> Result<()> {
    let start = Instant::now();

    let data = fs::read(&opts.input).map_err(Error::InputIo)?;
    if data.is_empty() {
        info!("{} is empty; nothing to write.", opts.input);
        return Ok(());
    }

    let container = compress_block(&data);
    fs::write(&opts.output, &container).map_err(Error::OutputIo)?;

    report(data.len(), container.len(), start.elapsed());
    Ok(())
}

/// Compress one in-memory buffer into a complete container.
///
/// The buffer must be non-empty; callers decide what an empty input
/// means (the file driver writes nothing).
pub fn compress_block(data: &[u8]) -> Vec<u8> {
    debug_assert!(!data.is_empty());

    // Model the whole input, matches included, not just the bytes that
    // end up as literals. The decoder reads this exact table from the
    // container, so both sides stay in step.
    let model = ByteModel::from_data(data);

    let parse = parser::parse(data);
    debug!(
        "lz77: {} matches, {} literals.",
        parse.matches.len(),
        parse.literals.len()
    );

    // One flag bit per parse item, MSB first.
    let mut flags = BitWriter::new(parse.is_match.len() / 8 + 1);
    for &is_match in &parse.is_match {
        flags.push_bit(is_match);
    }
    flags.flush();

    // Match records are stored plainly: distance LE16, then length.
    let mut packed_matches = Vec::with_capacity(parse.matches.len() * 3);
    for m in &parse.matches {
        packed_matches.extend_from_slice(&m.distance.to_le_bytes());
        packed_matches.push(m.length);
    }

    // The coder is LIFO, so literals go in back to front; the decoder
    // then pops them in file order.
    let mut rans = RansEncoder::new();
    for &literal in parse.literals.iter().rev() {
        rans.encode(&model, literal);
    }
    let rans_blob = rans.finish();
    let model_blob = model.to_blob();

    let header = Header {
        orig_size: data.len() as u32,
        rans_size: rans_blob.len() as u32,
        flags_size: flags.output.len() as u32,
        match_size: packed_matches.len() as u32,
        model_size: model_blob.len() as u32,
    };
    debug!(
        "blobs: rans {}, flags {}, matches {}, model {}.",
        header.rans_size, header.flags_size, header.match_size, header.model_size
    );

    let mut container = Vec::with_capacity(
        HEADER_SIZE + rans_blob.len() + flags.output.len() + packed_matches.len() + model_blob.len(),
    );
    container.extend_from_slice(&header.to_bytes());
    container.extend_from_slice(&rans_blob);
    container.extend_from_slice(&flags.output);
    container.extend_from_slice(&packed_matches);
    container.extend_from_slice(&model_blob);
    container
}

/// Log the numbers the user came for, Weissman score included.
fn report(orig_size: usize, compressed_size: usize, elapsed: Duration) {
    let ratio = orig_size as f64 / compressed_size as f64;
    let seconds = elapsed.as_secs_f64();
    let weissman = (ratio * (1.0 / (seconds + 0.0001)).log10() * 10.0).max(0.0);

    info!("Original size   : {} bytes", orig_size);
    info!("Compressed size : {} bytes", compressed_size);
    info!("Ratio           : {:.2}", ratio);
    info!("Time            : {:.4} s", seconds);
    info!("Weissman score  : {:.2}", weissman);
}

use std::fs;

use log::info;

use crate::bitstream::bitreader::BitReader;
use crate::compression::container::Header;
use crate::error::{Error, Result};
use crate::rans_coding::model::ByteModel;
use crate::rans_coding::rans::RansDecoder;
use crate::tools::cli::MidOpts;

/// Decompress the container named in opts (MidOpts) and write the
/// recovered bytes to the output path.
pub fn decompress(opts: &MidOpts) -> Result<()> {
    let container = fs::read(&opts.input).map_err(Error::InputIo)?;
    let output = decompress_block(&container)?;
    fs::write(&opts.output, &output).map_err(Error::OutputIo)?;
    info!("Decompressed {} bytes.", output.len());
    Ok(())
}

/// Reconstruct the original bytes from a complete container.
///
/// The flag stream drives everything: each 0-bit pops the next literal
/// out of the rANS decoder, each 1-bit replays the next match record
/// against the output built so far. The recorded original size is the
/// sole termination condition.
pub fn decompress_block(container: &[u8]) -> Result<Vec<u8>> {
    let header = Header::parse(container)?;
    let (rans_blob, flags_blob, match_blob, model_blob) = header.split(container)?;

    let orig_size = header.orig_size as usize;
    if orig_size == 0 {
        // An empty container is legal, but only the all-empty one.
        let body = (header.rans_size + header.flags_size + header.match_size
            + header.model_size) as usize;
        if body != 0 {
            return Err(Error::SizeMismatch {
                expected: 0,
                actual: body,
            });
        }
        return Ok(Vec::new());
    }

    let model = ByteModel::from_blob(model_blob)?;
    let mut rans = RansDecoder::new(rans_blob);
    let mut flags = BitReader::new(flags_blob);

    let mut output: Vec<u8> = Vec::with_capacity(orig_size);
    let mut match_ptr = 0;

    while output.len() < orig_size {
        if flags.bool_bit() {
            if match_ptr + 3 > match_blob.len() {
                return Err(Error::MatchUnderflow);
            }
            let distance = u16::from_le_bytes([match_blob[match_ptr], match_blob[match_ptr + 1]]);
            let length = match_blob[match_ptr + 2];
            match_ptr += 3;

            if distance == 0 || distance as usize > output.len() {
                return Err(Error::BadDistance {
                    distance,
                    position: output.len(),
                });
            }

            // Plain forward copy. The parser never emits a record whose
            // source range reaches the record's own output, so the whole
            // range exists before the first push.
            let copy_start = output.len() - distance as usize;
            for i in 0..length as usize {
                let byte = output[copy_start + i];
                output.push(byte);
            }
        } else {
            output.push(rans.decode(&model));
        }
    }

    if output.len() != orig_size {
        return Err(Error::SizeMismatch {
            expected: orig_size,
            actual: output.len(),
        });
    }
    Ok(output)
}

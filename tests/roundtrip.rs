//! End-to-end tests: every container that compress_block produces must
//! decompress back to the exact input, and the file front-ends must do
//! the same through the filesystem.

use middle_out::compression::compress::{compress, compress_block};
use middle_out::compression::container::{Header, HEADER_SIZE};
use middle_out::compression::decompress::{decompress, decompress_block};
use middle_out::tools::cli::{MidOpts, Mode};

use proptest::prelude::*;

fn round_trip(data: &[u8]) -> Vec<u8> {
    decompress_block(&compress_block(data)).unwrap()
}

#[test]
fn single_byte() {
    assert_eq!(round_trip(&[0x41]), vec![0x41]);
}

#[test]
fn all_distinct_bytes() {
    let data: Vec<u8> = (0..=255_u8).collect();
    assert_eq!(round_trip(&data), data);
}

#[test]
fn repeated_half() {
    assert_eq!(round_trip(b"ABCDEFGHABCDEFGH"), b"ABCDEFGHABCDEFGH".to_vec());
}

#[test]
fn run_of_one_byte() {
    assert_eq!(round_trip(b"AAAAAAAA"), b"AAAAAAAA".to_vec());
}

#[test]
fn long_runs_and_text() {
    let mut data = Vec::new();
    for _ in 0..200 {
        data.extend_from_slice(b"Hello, World! This is a test pattern. ");
    }
    data.extend_from_slice(&vec![0_u8; 3000]);
    assert_eq!(round_trip(&data), data);
}

#[test]
fn repeated_block_spanning_the_length_limit() {
    // A 300-byte block with no internal repeats, doubled: the second
    // copy becomes a length-255 match and a length-45 match.
    let mut block = Vec::with_capacity(300);
    for k in 0..150_u32 {
        block.push(k as u8);
        block.push((k + 100) as u8);
    }
    let mut data = block.clone();
    data.extend_from_slice(&block);

    let container = compress_block(&data);
    let header = Header::parse(&container).unwrap();
    assert_eq!(header.match_size, 6);
    let (_, _, matches, _) = header.split(&container).unwrap();
    assert_eq!(matches, &[0x2C, 0x01, 0xFF, 0x2C, 0x01, 0x2D]);

    assert_eq!(decompress_block(&container).unwrap(), data);
}

#[test]
fn input_larger_than_the_window() {
    let mut data = Vec::new();
    for k in 0..40_000_u32 {
        data.push((k % 7 + k % 13) as u8);
    }
    assert_eq!(round_trip(&data), data);
}

#[test]
fn container_accounting_holds_for_every_scenario() {
    let scenarios: Vec<Vec<u8>> = vec![
        vec![0x41],
        (0..=255_u8).collect(),
        b"ABCDEFGHABCDEFGH".to_vec(),
        b"AAAAAAAA".to_vec(),
    ];
    for data in scenarios {
        let container = compress_block(&data);
        let header = Header::parse(&container).unwrap();
        let blob_total = (header.rans_size
            + header.flags_size
            + header.match_size
            + header.model_size) as usize;
        assert_eq!(container.len(), HEADER_SIZE + blob_total);
        assert_eq!(&container[0..4], &[0x4F, 0x44, 0x49, 0x4D]);
        assert_eq!(header.match_size % 3, 0);
        assert_eq!(header.model_size, 512);
        assert_eq!(decompress_block(&container).unwrap(), data);
    }
}

#[test]
fn empty_input_writes_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bin");
    let output = dir.path().join("empty.mido");
    std::fs::write(&input, b"").unwrap();

    let opts = MidOpts {
        op_mode: Mode::Compress,
        input: input.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
    };
    compress(&opts).unwrap();
    assert!(!output.exists());
}

#[test]
fn file_front_ends_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let packed = dir.path().join("input.mido");
    let unpacked = dir.path().join("restored.bin");

    let mut data = Vec::new();
    for _ in 0..50 {
        data.extend_from_slice(b"squeeze me gently, byte by byte, ");
    }
    std::fs::write(&input, &data).unwrap();

    compress(&MidOpts {
        op_mode: Mode::Compress,
        input: input.to_string_lossy().into_owned(),
        output: packed.to_string_lossy().into_owned(),
    })
    .unwrap();

    decompress(&MidOpts {
        op_mode: Mode::Decompress,
        input: packed.to_string_lossy().into_owned(),
        output: unpacked.to_string_lossy().into_owned(),
    })
    .unwrap();

    assert_eq!(std::fs::read(&unpacked).unwrap(), data);
}

#[test]
fn missing_input_is_an_input_error() {
    let opts = MidOpts {
        op_mode: Mode::Compress,
        input: "/no/such/file/anywhere".to_string(),
        output: "/tmp/unused.mido".to_string(),
    };
    assert!(matches!(
        compress(&opts),
        Err(middle_out::error::Error::InputIo(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        prop_assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn prop_round_trip_skewed_bytes(data in prop::collection::vec(0_u8..4, 1..4096)) {
        // A tiny alphabet maximizes matches and rANS renormalization.
        prop_assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn prop_flag_accounting(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        let container = compress_block(&data);
        let header = Header::parse(&container).unwrap();
        let parse = middle_out::lz77::parser::parse(&data);
        let items = parse.is_match.len();
        prop_assert_eq!(header.flags_size as usize, items.div_ceil(8));
        prop_assert_eq!(header.match_size as usize, parse.matches.len() * 3);
        let covered: usize = parse.literals.len()
            + parse.matches.iter().map(|m| m.length as usize).sum::<usize>();
        prop_assert_eq!(covered, data.len());
    }
}

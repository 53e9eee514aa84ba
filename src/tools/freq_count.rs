//! Byte frequency counting for a slice of u8 data.
//!
//! Produces the 256-entry histogram that the entropy model normalizes.
//! Large inputs are counted in parallel chunks and the partial counts
//! merged; 16k chunks are pretty much the sweet spot.

use rayon::prelude::*;

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> [u32; 256] {
    if data.len() > 64_000 {
        data.par_chunks(16_000)
            .fold(
                || [0_u32; 256],
                |mut counts: [u32; 256], chunk| {
                    chunk.iter().for_each(|&el| counts[el as usize] += 1);
                    counts
                },
            )
            .reduce(
                || [0_u32; 256],
                |mut merged, partial| {
                    merged
                        .iter_mut()
                        .zip(&partial)
                        .for_each(|(m, p)| *m += p);
                    merged
                },
            )
    } else {
        let mut counts = [0_u32; 256];
        data.iter().for_each(|&el| counts[el as usize] += 1);
        counts
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn counts_small_input() {
        let counts = freqs(b"AAB");
        assert_eq!(counts[b'A' as usize], 2);
        assert_eq!(counts[b'B' as usize], 1);
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn parallel_path_matches_serial() {
        let data: Vec<u8> = (0..100_000_u32).map(|i| (i % 251) as u8).collect();
        let parallel = freqs(&data);
        let mut serial = [0_u32; 256];
        data.iter().for_each(|&el| serial[el as usize] += 1);
        assert_eq!(parallel, serial);
    }
}

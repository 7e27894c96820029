use crate::UNIT_MICROSECONDS;

/// Number of samples spanned by one unit interval, truncated
///
/// 44.1 kHz gives 14 samples, 48 kHz gives 15.
pub fn unit_samples(sample_rate: u32) -> usize {
    (UNIT_MICROSECONDS * sample_rate as u64 / 1_000_000) as usize
}

/// Intervals shorter than this many samples are `1` bits, everything else is a `0`
pub fn decision_threshold(sample_rate: u32) -> usize {
    2 * unit_samples(sample_rate)
}

/// Convert the gaps between consecutive zero crossings into bits
///
/// Produces one bit per gap, so `crossings.len() - 1` bits (none for fewer than two crossings).
pub fn recover_bits(crossings: &[usize], sample_rate: u32) -> Vec<bool> {
    let threshold = decision_threshold(sample_rate);

    crossings
        .windows(2)
        .map(|pair| pair[1] - pair[0] < threshold)
        .collect()
}

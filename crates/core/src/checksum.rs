//! Check digit for Code 128 UCC case mode (`^BC` mode `U`).

/// Number of data characters a UCC case mode field carries.
pub const UCC_CASE_DATA_LEN: usize = 19;

/// Left-pad `content` with `'0'` to [`UCC_CASE_DATA_LEN`] characters, then
/// keep only the first [`UCC_CASE_DATA_LEN`].
pub fn pad_ucc_case_data(content: &str) -> String {
    let len = content.chars().count();
    let mut padded = String::with_capacity(UCC_CASE_DATA_LEN.max(content.len()));
    padded.extend(std::iter::repeat_n('0', UCC_CASE_DATA_LEN.saturating_sub(len)));
    padded.extend(content.chars().take(UCC_CASE_DATA_LEN - padded.len()));
    padded
}

/// Compute the mod-10 check digit over the first 19 characters of `data`.
///
/// Weights alternate 7, 9, 7, 9, ... starting with 7 at index 0. This is not
/// the UPC/EAN 3-1 scheme.
///
/// Each character contributes `(c - '0') * weight`; the sum is reduced with
/// Euclidean modulo so the result is always `0..=9`.
pub fn ucc_case_check_digit(data: &str) -> u8 {
    let sum: i64 = data
        .chars()
        .take(UCC_CASE_DATA_LEN)
        .enumerate()
        .map(|(i, c)| (i64::from(u32::from(c)) - i64::from(b'0')) * weight(i))
        .sum();
    // rem_euclid(10) is always in 0..=9.
    sum.rem_euclid(10) as u8
}

fn weight(index: usize) -> i64 {
    (index % 2) as i64 * 2 + 7
}

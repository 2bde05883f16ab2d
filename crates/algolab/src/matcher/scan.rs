use super::rolling::RollingHash;

/// Every 0-based byte offset `i` with `text[i..i + pattern.len()] == pattern`,
/// in ascending order.
///
/// Matching operates on UTF-8 bytes, so offsets are byte offsets (identical
/// to character offsets for ASCII input). Overlapping occurrences are all
/// reported: `"aa"` in `"aaa"` yields `[0, 1]`.
///
/// An empty pattern or a pattern longer than the text yields no occurrences.
pub fn find_all_occurrences(pattern: &str, text: &str) -> Vec<usize> {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();
    let m = pattern.len();
    let n = text.len();
    if m == 0 || m > n {
        return Vec::new();
    }

    let target = RollingHash::new(pattern).value();
    let mut window = RollingHash::new(&text[..m]);
    let mut occurrences = Vec::new();
    for i in 0..=n - m {
        if window.value() == target && &text[i..i + m] == pattern {
            occurrences.push(i);
        }
        if i + m < n {
            window.roll(text[i], text[i + m]);
        }
    }
    occurrences
}

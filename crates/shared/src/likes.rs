//! Helpers for the string-encoded like counter.

/// Returns `likes + 1` as a decimal string.
///
/// Counts that do not parse are treated as zero.
pub fn increment_likes(likes: &str) -> String {
    let current = likes.trim().parse::<u64>().unwrap_or(0);
    current.saturating_add(1).to_string()
}

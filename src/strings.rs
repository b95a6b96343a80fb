//! String manipulation helpers: trimming, padding, middle-ellipsis
//! truncation, marker extraction, and zero-padding.
//!
//! All length arithmetic is in characters, not bytes, so multi-byte input
//! never splits a character. Length parameters that have a conventional
//! default treat `0` as "use the default".

/// Trim whitespace and hard-truncate to `max_length` characters, appending
/// `"..."` when anything was cut. A `max_length` of `0` selects the default
/// of 60. Empty input yields an empty string.
#[must_use]
pub fn trim_text(input: &str, max_length: usize) -> String {
    if input.is_empty() {
        return String::new();
    }

    let max_length = if max_length == 0 { 60 } else { max_length };
    let trimmed = input.trim();

    if trimmed.chars().count() > max_length {
        let cut: String = trimmed.chars().take(max_length).collect();
        format!("{cut}...")
    } else {
        trimmed.to_string()
    }
}

/// Strip leading ASCII spaces (only spaces — tabs and newlines stay).
#[must_use]
pub fn trim_left(input: &str) -> &str {
    input.trim_start_matches(' ')
}

/// Zero-pad a number to `width` digits.
///
/// Numbers wider than `width` are truncated to their last `width` digits
/// (`number_pad(12345, 3)` is `"345"`), so the output width is fixed.
#[must_use]
pub fn number_pad(num: u64, width: usize) -> String {
    let padded = format!("000000000{num}");
    let start = padded.len().saturating_sub(width);
    padded[start..].to_string()
}

/// Pad `input` on the right with `pad_char` up to `length` characters.
/// Input already at or beyond `length` is returned unchanged.
#[must_use]
pub fn pad_right(input: &str, length: usize, pad_char: char) -> String {
    let count = input.chars().count();
    if count >= length {
        return input.to_string();
    }
    format!("{input}{}", pad_char.to_string().repeat(length - count))
}

/// Pad `input` on the left with `pad_char` up to `length` characters.
/// Input already at or beyond `length` is returned unchanged.
#[must_use]
pub fn pad_left(input: &str, length: usize, pad_char: char) -> String {
    let count = input.chars().count();
    if count >= length {
        return input.to_string();
    }
    format!("{}{input}", pad_char.to_string().repeat(length - count))
}

/// Shorten a long string by cutting out the middle.
///
/// Strings longer than `max_length` characters become the first
/// `first_part` characters, `"..."`, and the last `last_part` characters;
/// anything at or under `max_length` passes through untouched. A `0` for
/// any parameter selects the defaults 65 / 40 / 20.
#[must_use]
pub fn ellipsis_middle(
    input: &str,
    max_length: usize,
    first_part: usize,
    last_part: usize,
) -> String {
    let max_length = if max_length == 0 { 65 } else { max_length };
    let first_part = if first_part == 0 { 40 } else { first_part };
    let last_part = if last_part == 0 { 20 } else { last_part };

    let count = input.chars().count();
    if count <= max_length {
        return input.to_string();
    }

    let head: String = input.chars().take(first_part).collect();
    let tail: String = input.chars().skip(count.saturating_sub(last_part)).collect();
    format!("{head}...{tail}")
}

/// The text between the first occurrence of `prefix` and the next
/// occurrence of `suffix` after it. Empty string when either marker is
/// missing.
#[must_use]
pub fn extract_substring(original: &str, prefix: &str, suffix: &str) -> String {
    if original.is_empty() {
        return String::new();
    }

    let Some(start) = original.find(prefix) else {
        return String::new();
    };
    let rest = &original[start + prefix.len()..];

    rest.find(suffix)
        .map_or_else(String::new, |end| rest[..end].to_string())
}

/// The last character of `input` as a `&str` slice (empty for empty input).
#[must_use]
pub fn last_char(input: &str) -> &str {
    input
        .char_indices()
        .last()
        .map_or("", |(idx, _)| &input[idx..])
}

/// `input` without its last character (unchanged when empty).
#[must_use]
pub fn remove_last_char(input: &str) -> &str {
    input
        .char_indices()
        .last()
        .map_or(input, |(idx, _)| &input[..idx])
}

/// Returns `true` iff any of `needles` occurs in `input` as a substring.
/// An empty `input` or an empty needle list is `false`.
#[must_use]
pub fn contain_text<S: AsRef<str>>(input: &str, needles: &[S]) -> bool {
    if input.is_empty() || needles.is_empty() {
        return false;
    }
    needles.iter().any(|needle| input.contains(needle.as_ref()))
}

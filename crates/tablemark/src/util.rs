//! Codepoint-aware text measurement and padding.
//!
//! Widths here are Unicode codepoint counts, not terminal display columns:
//! a Markdown renderer lays the table out itself, so what matters is that
//! every cell in a column spans the same number of characters in the source
//! text, not that CJK glyphs occupy two terminal cells.

use crate::error::{Result, TableError};

/// Returns the width of a string measured in Unicode codepoints.
///
/// # Example
///
/// ```rust
/// use tablemark::codepoint_width;
///
/// assert_eq!(codepoint_width("hello"), 5);
/// assert_eq!(codepoint_width("café"), 4);
/// assert_eq!(codepoint_width("日本語"), 3);
/// ```
pub fn codepoint_width(s: &str) -> usize {
    s.chars().count()
}

/// Pads the start of a string (right-aligns) to the target width.
///
/// Returns the string unchanged when it is already exactly `width`
/// codepoints wide, and fails with [`TableError::PadOverflow`] when the
/// content is wider than `width`: the caller must compute widths from real
/// content first.
///
/// # Example
///
/// ```rust
/// use tablemark::pad_left;
///
/// assert_eq!(pad_left("42", 5, ' ').unwrap(), "   42");
/// ```
pub fn pad_left(s: &str, width: usize, fill: char) -> Result<String> {
    let current = codepoint_width(s);
    if current > width {
        return Err(TableError::PadOverflow {
            width: current,
            limit: width,
        });
    }

    let mut padded = String::with_capacity(s.len() + (width - current));
    padded.extend(std::iter::repeat(fill).take(width - current));
    padded.push_str(s);
    Ok(padded)
}

/// Pads the end of a string (left-aligns) to the target width.
///
/// Same contract as [`pad_left`].
///
/// # Example
///
/// ```rust
/// use tablemark::pad_right;
///
/// assert_eq!(pad_right("42", 5, ' ').unwrap(), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize, fill: char) -> Result<String> {
    let current = codepoint_width(s);
    if current > width {
        return Err(TableError::PadOverflow {
            width: current,
            limit: width,
        });
    }

    let mut padded = String::with_capacity(s.len() + (width - current));
    padded.push_str(s);
    padded.extend(std::iter::repeat(fill).take(width - current));
    Ok(padded)
}

/// Pads both sides of a string (centers) to the target width.
///
/// The deficit splits as `floor(deficit / 2)` at the start with the
/// remainder at the end, so an odd deficit puts the extra character at the
/// end.
///
/// # Example
///
/// ```rust
/// use tablemark::pad_center;
///
/// assert_eq!(pad_center("hi", 6, ' ').unwrap(), "  hi  ");
/// assert_eq!(pad_center("eight", 10, ' ').unwrap(), "  eight   ");
/// ```
pub fn pad_center(s: &str, width: usize, fill: char) -> Result<String> {
    let current = codepoint_width(s);
    if current > width {
        return Err(TableError::PadOverflow {
            width: current,
            limit: width,
        });
    }

    let deficit = width - current;
    let start = deficit / 2;
    let end = deficit - start;

    let mut padded = String::with_capacity(s.len() + deficit);
    padded.extend(std::iter::repeat(fill).take(start));
    padded.push_str(s);
    padded.extend(std::iter::repeat(fill).take(end));
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- codepoint_width tests ---

    #[test]
    fn codepoint_width_ascii() {
        assert_eq!(codepoint_width("hello"), 5);
        assert_eq!(codepoint_width(""), 0);
        assert_eq!(codepoint_width(" "), 1);
    }

    #[test]
    fn codepoint_width_multibyte() {
        assert_eq!(codepoint_width("café"), 4);
        assert_eq!(codepoint_width("日本語"), 3);
        assert_eq!(codepoint_width("naïve"), 5);
    }

    // --- pad_left tests ---

    #[test]
    fn pad_left_basic() {
        assert_eq!(pad_left("start", 10, ' ').unwrap(), "     start");
    }

    #[test]
    fn pad_left_exact_width() {
        assert_eq!(pad_left("hello", 5, ' ').unwrap(), "hello");
    }

    #[test]
    fn pad_left_empty() {
        assert_eq!(pad_left("", 4, ' ').unwrap(), "    ");
    }

    #[test]
    fn pad_left_overflow() {
        let err = pad_left("too wide", 3, ' ').unwrap_err();
        assert!(matches!(
            err,
            TableError::PadOverflow { width: 8, limit: 3 }
        ));
    }

    #[test]
    fn pad_left_counts_codepoints_not_bytes() {
        // "café" is 5 bytes but 4 codepoints
        assert_eq!(pad_left("café", 6, ' ').unwrap(), "  café");
    }

    // --- pad_right tests ---

    #[test]
    fn pad_right_basic() {
        assert_eq!(pad_right("end", 10, ' ').unwrap(), "end       ");
    }

    #[test]
    fn pad_right_exact_width() {
        assert_eq!(pad_right("hello", 5, ' ').unwrap(), "hello");
    }

    #[test]
    fn pad_right_overflow() {
        assert!(pad_right("too wide", 3, ' ').is_err());
    }

    // --- pad_center tests ---

    #[test]
    fn pad_center_even_deficit() {
        assert_eq!(pad_center("eleven", 10, ' ').unwrap(), "  eleven  ");
    }

    #[test]
    fn pad_center_odd_deficit_extra_at_end() {
        assert_eq!(pad_center("eight", 10, ' ').unwrap(), "  eight   ");
    }

    #[test]
    fn pad_center_exact_width() {
        assert_eq!(pad_center("hello", 5, ' ').unwrap(), "hello");
    }

    #[test]
    fn pad_center_overflow() {
        assert!(pad_center("too wide", 3, ' ').is_err());
    }

    #[test]
    fn pad_center_custom_fill() {
        assert_eq!(pad_center("ab", 6, '.').unwrap(), "..ab..");
    }
}

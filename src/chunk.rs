//! Line-respecting splitting of oversized piped content.
//!
//! Piped input can be far larger than a local model's context, so it is cut
//! into chunks of at most `max_chars` characters, preferring to break at the
//! last line break inside each window. Lengths are counted in chars, never
//! bytes, so cuts always land on UTF-8 boundaries.

use serde::{Deserialize, Serialize};

/// What to do with a window that contains no line break at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongLines {
    /// Cut the line exactly at the bound.
    #[default]
    Cut,
    /// Keep the whole line in one chunk, even if it exceeds the bound.
    Keep,
}

/// One slice of the piped payload, in payload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Splits text into bounded chunks.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
    long_lines: LongLines,
}

impl Chunker {
    /// A chunker with the given bound. A bound of zero is treated as one.
    pub fn new(max_chars: usize, long_lines: LongLines) -> Self {
        Self {
            max_chars: max_chars.max(1),
            long_lines,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Splits `text` into indexed chunks. See [`split_on_lines`].
    pub fn split<'a>(&self, text: &'a str) -> Vec<Chunk<'a>> {
        split_on_lines(text, self.max_chars, self.long_lines)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chunk { index, text })
            .collect()
    }
}

/// Splits `text` into slices of at most `max_chars` chars.
///
/// Text that already fits is returned whole. Otherwise each window ends at
/// its last `'\n'`, including the final window; a window without one is cut
/// at the bound (or, under [`LongLines::Keep`], extended to the end of its
/// line). The line breaks at a split point are dropped, so no chunk starts
/// or ends with a blank line. An oversized input made only of line breaks
/// yields no chunks.
pub fn split_on_lines(text: &str, max_chars: usize, long_lines: LongLines) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return vec![text];
    }

    let mut chunks = Vec::new();
    // The start of the input counts as a split point.
    let mut remaining = text.trim_start_matches('\n');
    while !remaining.is_empty() {
        // Byte offset just past the window.
        let end = remaining
            .char_indices()
            .nth(max_chars)
            .map_or(remaining.len(), |(offset, _)| offset);

        // `remaining` never starts with '\n', so a found break is past offset 0.
        let split = match remaining[..end].rfind('\n') {
            Some(pos) => pos,
            None => match long_lines {
                LongLines::Cut => end,
                LongLines::Keep => remaining.find('\n').unwrap_or(remaining.len()),
            },
        };

        chunks.push(&remaining[..split]);
        remaining = remaining[split..].trim_start_matches('\n');
    }
    chunks
}

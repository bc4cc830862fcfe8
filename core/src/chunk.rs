//! Fixed-size word chunking.

/// Number of words per chunk when nothing else is configured.
pub const DEFAULT_WORDS_PER_CHUNK: usize = 100;

/// A contiguous run of words from the input, joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Zero-based position of this chunk in the input.
    pub index: usize,
    pub word_count: usize,
    pub text: String,
}

/// Word separator: Unicode whitespace plus the ASCII information separators
/// `\x1c`..=`\x1f`.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split `text` on [`is_separator`] into chunks of at most `words_per_chunk` words.
///
/// Chunks cover every word exactly once, in order. The last chunk may be
/// shorter. Empty or whitespace-only input yields no chunks. A chunk size of
/// zero is treated as one.
pub fn chunk_text(text: &str, words_per_chunk: usize) -> impl Iterator<Item = TextChunk> + '_ {
    let size = words_per_chunk.max(1);
    let mut words = text
        .split(is_separator)
        .filter(|w| !w.is_empty())
        .peekable();
    let mut index = 0;

    std::iter::from_fn(move || {
        words.peek()?;
        let run: Vec<&str> = words.by_ref().take(size).collect();
        let chunk = TextChunk {
            index,
            word_count: run.len(),
            text: run.join(" "),
        };
        index += 1;
        Some(chunk)
    })
}

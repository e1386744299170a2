//! Approximate token counting for tellm.
//!
//! Local models use many different tokenizers; cl100k_base (GPT-4 family)
//! serves as a reasonable approximation for reporting prompt sizes.

use anyhow::Result;

/// Approximate token count of `text` using cl100k_base.
pub fn count_tokens(text: &str) -> Result<usize> {
    let bpe = tiktoken_rs::cl100k_base()?;
    Ok(bpe.encode_ordinary(text).len())
}

/// Format a count with thousands separators. Example: "12,345"
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

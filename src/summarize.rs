//! Per-chunk summarization of piped content.
//!
//! Each chunk is summarized by its own model request. Requests may run
//! concurrently, but every summary is stored in the slot of its chunk index,
//! so the combined summary always follows payload order.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};

use crate::chunk::Chunk;
use crate::constants::{CHUNK_INSTRUCTIONS, CHUNK_PROMPT_PREFIX};
use crate::provider::LanguageModel;

/// Summarizes every chunk, at most `concurrency` requests at a time.
///
/// Returns the trimmed summaries in chunk order. The first failed request
/// aborts the rest and no summaries are returned.
pub async fn summarize_chunks(
    model: &dyn LanguageModel,
    chunks: &[Chunk<'_>],
    concurrency: usize,
) -> Result<Vec<String>> {
    let total = chunks.len();
    let mut slots: Vec<Option<String>> = vec![None; total];

    let mut pending = stream::iter(chunks.iter().map(|chunk| async move {
        let message = format!("{CHUNK_PROMPT_PREFIX}{}", chunk.text);
        let result = model
            .respond(&message, Some(CHUNK_INSTRUCTIONS))
            .await
            .with_context(|| format!("summarizing part {} of {total}", chunk.index + 1));
        (chunk.index, result)
    }))
    .buffer_unordered(concurrency.max(1));

    while let Some((index, result)) = pending.next().await {
        let summary = result?;
        tracing::debug!(part = index + 1, total, "chunk summarized");
        slots[index] = Some(summary.trim().to_string());
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Joins summaries into the text that stands in for the piped content.
pub fn combine(summaries: &[String]) -> String {
    summaries.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::{Chunker, LongLines};
    use crate::constants::CHUNK_INSTRUCTIONS;
    use crate::testing::ScriptedModel;
    use std::time::Duration;

    fn chunks(texts: &[&'static str]) -> Vec<Chunk<'static>> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Chunk { index, text })
            .collect()
    }

    #[tokio::test]
    async fn one_request_per_chunk_with_fixed_instructions() {
        let model = ScriptedModel::new();
        let summaries = summarize_chunks(&model, &chunks(&["alpha", "beta"]), 1)
            .await
            .unwrap();

        assert_eq!(summaries, vec!["summary(alpha)", "summary(beta)"]);
        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].message,
            "Please summarize the following content in English:\n\nalpha"
        );
        assert!(calls
            .iter()
            .all(|c| c.instructions.as_deref() == Some(CHUNK_INSTRUCTIONS)));
    }

    #[tokio::test]
    async fn order_follows_chunks_not_completion() {
        // Earlier chunks finish last.
        let model = ScriptedModel::new().with_delay(|message| {
            let n: u64 = message
                .rsplit(' ')
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
            Duration::from_millis(60 - n * 10)
        });
        let input = chunks(&["part 0", "part 1", "part 2", "part 3", "part 4"]);
        let summaries = summarize_chunks(&model, &input, 5).await.unwrap();

        assert_eq!(
            combine(&summaries),
            "summary(part 0) summary(part 1) summary(part 2) summary(part 3) summary(part 4)"
        );
    }

    #[tokio::test]
    async fn failure_aborts_with_no_output() {
        let model = ScriptedModel::new().failing_when("bad");
        let err = summarize_chunks(&model, &chunks(&["good", "bad", "good again"]), 1)
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("summarizing part 2 of 3"));
        // Sequential processing stops at the failure.
        assert_eq!(model.calls().len(), 2);
    }

    #[tokio::test]
    async fn no_chunks_means_empty_summary() {
        let model = ScriptedModel::new();
        let summaries = summarize_chunks(&model, &[], 3).await.unwrap();
        assert!(summaries.is_empty());
        assert_eq!(combine(&summaries), "");
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn works_on_chunker_output() {
        let text = "first line\nsecond line\nthird line";
        let chunker = Chunker::new(12, LongLines::Cut);
        let model = ScriptedModel::new();
        let summaries = summarize_chunks(&model, &chunker.split(text), 2)
            .await
            .unwrap();
        assert_eq!(
            summaries,
            vec![
                "summary(first line)",
                "summary(second line)",
                "summary(third line)"
            ]
        );
    }
}

//! Token-budget batching and rewrite of ordered transcripts.
//!
//! Transcript units are packed greedily, in order, into batches whose summed
//! token counts stay within the budget. Each batch is rewritten by the remote
//! collaborator and the outputs are joined into one report. The packing is
//! pure and synchronous; only the rewrite calls are async.

use crate::error::{Result, VoxbriefError};
use crate::remote::rewrite::Rewriter;
use crate::tokens::TokenCounter;
use crate::transcript::TranscriptUnit;

/// Pack transcript texts into token-budget-bounded batches.
///
/// Single pass, order preserving: each unit either joins the accumulator or,
/// when it would push the running count past the budget, flushes the
/// accumulator first and starts the next batch. A unit is never split, so a
/// single unit over the budget becomes a batch of its own; the overflow check
/// only fires when the accumulator already holds prior content.
///
/// Unit texts within a batch are joined with a single space. The running
/// count sums per-unit token counts; the joining spaces are not recounted.
///
/// # Errors
///
/// `EmptyInput` when `units` is empty.
pub fn pack_batches(
    units: &[TranscriptUnit],
    token_budget: usize,
    counter: &dyn TokenCounter,
) -> Result<Vec<String>> {
    if units.is_empty() {
        return Err(VoxbriefError::EmptyInput);
    }

    let mut batches = Vec::new();
    let mut accumulator = String::new();
    let mut running_count = 0usize;

    for unit in units {
        let unit_tokens = counter.count(&unit.text);

        if running_count + unit_tokens > token_budget && !accumulator.is_empty() {
            batches.push(std::mem::take(&mut accumulator));
            accumulator.push_str(&unit.text);
            running_count = unit_tokens;
        } else {
            if !accumulator.is_empty() {
                accumulator.push(' ');
            }
            accumulator.push_str(&unit.text);
            running_count += unit_tokens;
        }
    }

    if !accumulator.is_empty() {
        batches.push(accumulator);
    }

    Ok(batches)
}

/// Merge ordered transcripts into one report text.
///
/// Batches are rewritten strictly in flush order and the outputs joined with a
/// blank line. Any rewrite failure propagates immediately; nothing is retried
/// here and no partial report text is returned.
pub async fn merge_transcripts(
    units: &[TranscriptUnit],
    token_budget: usize,
    counter: &dyn TokenCounter,
    rewriter: &dyn Rewriter,
) -> Result<String> {
    let batches = pack_batches(units, token_budget, counter)?;

    let mut rewritten = Vec::with_capacity(batches.len());
    for batch in &batches {
        rewritten.push(rewriter.rewrite(batch).await?);
    }

    Ok(rewritten.join("\n\n"))
}

//! History compactor.
//!
//! Bounds the volume of history forwarded to the model while keeping the
//! most recent turns verbatim. Conversations at or under the recent
//! window pass through untouched with no summarization call; longer ones
//! get exactly one summary turn covering everything before the window,
//! followed by the window itself in original order.

use tracing::{debug, instrument};

use stakesim_types::error::CompactionError;
use stakesim_types::message::Message;
use stakesim_types::turn::CompactedTurn;

use crate::llm::gateway::SummaryGateway;

/// Deterministic windowing + summarization policy.
///
/// The split point is purely a function of the history length and the
/// configured window; the compactor performs no persistence and never
/// mutates its input.
#[derive(Debug, Clone)]
pub struct HistoryCompactor {
    recent_window: usize,
}

impl Default for HistoryCompactor {
    fn default() -> Self {
        Self { recent_window: 10 }
    }
}

impl HistoryCompactor {
    pub fn new(recent_window: usize) -> Self {
        Self { recent_window }
    }

    pub fn recent_window(&self) -> usize {
        self.recent_window
    }

    /// Split a history into `(older, recent)` slices.
    ///
    /// `recent` holds the last `recent_window` messages; `older` holds
    /// everything before them. Histories at or under the window come
    /// back entirely in `recent`.
    pub fn split<'a>(history: &'a [Message], recent_window: usize) -> (&'a [Message], &'a [Message]) {
        if history.len() <= recent_window {
            (&[], history)
        } else {
            history.split_at(history.len() - recent_window)
        }
    }

    /// Compact a full ordered history into a bounded turn sequence.
    ///
    /// Returns the history verbatim when it fits the window. Otherwise
    /// summarizes the older slice through `summarizer` and returns
    /// `[summary] + recent`. A failed or blank summary for a non-empty
    /// older slice fails the whole compaction -- older turns are never
    /// silently dropped.
    #[instrument(
        name = "compact_history",
        skip(self, history, summarizer),
        fields(history_len = history.len(), recent_window = self.recent_window)
    )]
    pub async fn compact<S: SummaryGateway>(
        &self,
        history: &[Message],
        summarizer: &S,
    ) -> Result<Vec<CompactedTurn>, CompactionError> {
        let (older, recent) = Self::split(history, self.recent_window);

        if older.is_empty() {
            debug!(turns = recent.len(), "History fits recent window, no summarization");
            return Ok(recent.iter().map(CompactedTurn::verbatim).collect());
        }

        let summary = summarizer
            .summarize(older)
            .await
            .map_err(|e| CompactionError::SummarizationFailed(e.to_string()))?;
        let summary = summary.trim();

        if summary.is_empty() {
            return Err(CompactionError::SummarizationFailed(format!(
                "summarizer returned blank output for {} older messages",
                older.len()
            )));
        }

        debug!(
            summarized = older.len(),
            kept = recent.len(),
            "Compacted history"
        );

        let mut turns = Vec::with_capacity(1 + recent.len());
        turns.push(CompactedTurn::Summary {
            content: summary.to_string(),
        });
        turns.extend(recent.iter().map(CompactedTurn::verbatim));
        Ok(turns)
    }
}

use thiserror::Error;

/// Errors from message store operations (used by trait definitions in
/// stakesim-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Errors from loading persona or project context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("context source unreadable: {0}")]
    Io(String),

    #[error("context source malformed: {0}")]
    Malformed(String),
}

/// Errors from history compaction.
#[derive(Debug, Error)]
pub enum CompactionError {
    /// The summarization capability failed or returned unusable output
    /// for a non-empty older slice. Compaction fails loudly rather than
    /// returning a truncated history.
    #[error("summarization failed: {0}")]
    SummarizationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");

        let err = RepositoryError::WriteRejected("empty content".to_string());
        assert_eq!(err.to_string(), "write rejected: empty content");
    }

    #[test]
    fn test_context_error_display() {
        let err = ContextError::Malformed("missing field `name`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_compaction_error_display() {
        let err = CompactionError::SummarizationFailed("empty summary".to_string());
        assert_eq!(err.to_string(), "summarization failed: empty summary");
    }
}

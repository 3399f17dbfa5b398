// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Boxed error returned by fallible caller-supplied callables.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Root error type shared across the workspace.
///
/// Every failure surfaces synchronously to the caller of the terminal
/// operation that detected it; nothing is retried.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<QueryError>,
    },

    /// A reduction with no identity (average, max, min, last) ran over zero elements.
    #[error("{operation}: sequence contains no elements")]
    EmptySequence { operation: &'static str },

    #[error("{operation}: sequence contains no matching element")]
    NoMatchingElement { operation: &'static str },

    #[error("An element with the same key already exists: {key}")]
    DuplicateKey { key: String },

    #[error("Operation '{operation}' is order-sensitive and is only defined in sequential mode")]
    UnsupportedParallelOperation { operation: &'static str },

    #[error("Execution was cancelled")]
    Cancelled,

    #[error("Handler #{index} aborted the invocation chain: {source}")]
    HandlerFailure {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;

impl QueryError {
    /// Strips any `Context` layers and returns the innermost error.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), Self::Cancelled)
    }

    pub fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKey { key: format!("{key:?}") }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<QueryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| QueryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| QueryError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_unwraps_nested_context() {
        let err: Result<()> = Err(QueryError::Cancelled);
        let err = err.context("summing partitions").context("running report").unwrap_err();
        assert!(matches!(err.root(), QueryError::Cancelled));
        assert!(err.is_cancelled());
    }

    #[test]
    fn duplicate_key_renders_debug_form() {
        let err = QueryError::duplicate_key(&"a");
        assert_eq!(err.to_string(), "An element with the same key already exists: \"a\"");
    }
}

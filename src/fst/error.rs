use super::label::Label;

/// Errors that can occur while inserting keys into a builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError<L: Label> {
    /// Keys were not provided in lexicographically sorted order.
    ///
    /// Contains the two keys that were out of order. The builder is left exactly
    /// as it was before the rejected insertion.
    #[error("keys out of order: {previous:?} came before {current:?}")]
    OutOfOrder {
        /// The most recently accepted key.
        previous: Vec<L>,
        /// The rejected key, which sorts before `previous`.
        current: Vec<L>,
    },
}

/// Errors that can occur when building a graph from a file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read key list: {0}")]
    Io(#[from] std::io::Error),
    /// The keys in the file were not sorted.
    #[error(transparent)]
    Build(#[from] BuildError<char>),
    /// A `key<TAB>value` line was malformed or its value did not parse.
    #[error("line {line}: cannot parse {text:?}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending line, without its line terminator.
        text: String,
    },
}

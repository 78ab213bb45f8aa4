//! The `PieError` type returned by every fallible operation in the crate.
use thiserror::Error;

/// Everything that can go wrong while reading input or evaluating a union.
///
/// Apart from `Io` and `EndOfInput`, these are local to one menu action: the
/// session reports them and carries on.
#[derive(Error, Debug)]
pub enum PieError {
    /// A token didn't parse as the kind of value we asked for
    #[error("invalid input: expected {expected}, found {found:?}")]
    InvalidInput {
        /// What we were trying to read, e.g. "the number of sets"
        expected: String,
        /// The offending token
        found: String,
    },

    /// The input source ran dry while we were waiting for `0`
    #[error("input ended while reading {0}")]
    EndOfInput(String),

    /// A set count of zero
    #[error("at least one set is required")]
    NoSets,

    /// Subset enumeration is exponential, so we refuse more than `max` sets
    #[error("too many sets: {requested} requested, at most {max} are supported")]
    TooManySets {
        /// Number of sets asked for
        requested: usize,
        /// `subsets::MAX_SETS`
        max: usize,
    },

    /// Two base sets share a name, so their combination keys would collide
    #[error("duplicate set name: {0:?}")]
    DuplicateSetName(String),

    /// An empty key separator would make `A` and `B` join to the name `AB`
    #[error("the combination key separator must not be empty")]
    EmptySeparator,

    /// A set name that is empty or contains the key separator
    #[error("set name {name:?} must be non-empty and must not contain {separator:?}")]
    InvalidSetName {
        /// The rejected name
        name: String,
        /// The combination key separator in use
        separator: String,
    },

    /// A 0-based set index past the end of the collection
    #[error("set index {index} is out of range for {count} sets")]
    SetIndexOutOfRange {
        /// The requested index
        index: usize,
        /// How many sets there are
        count: usize,
    },

    /// A cardinality or running total that doesn't fit in an `i64`
    #[error("arithmetic overflow at {0}")]
    Overflow(String),

    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PieError {
    /// Can the interactive loop report this error and continue?
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PieError::Io(_) | PieError::EndOfInput(_))
    }
}

//! Error types shared by every container.
//!
//! Only two things can go wrong in this crate: an index argument outside
//! the live range, or an insert into a structure whose fixed capacity is
//! already used up. Both are reported immediately to the caller.
//!
//! Emptiness is not an error. Peeking or removing from an empty container
//! returns `None`, and so does a search that finds nothing.

/// Represents the errors a container operation can report.
///
/// # Examples
///
/// ```rust
/// use linear_collections::CollectionError;
///
/// let error = CollectionError::InvalidIndex { index: 4, size: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "invalid index 4: valid range is 0..2"
/// );
///
/// let error = CollectionError::CapacityExceeded { capacity: 10 };
/// assert_eq!(format!("{error}"), "capacity of 10 exceeded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The index lies outside the range accepted by the operation.
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The number of live elements when the call was made.
        size: usize,
    },
    /// The container is at its fixed capacity and cannot accept the insert.
    CapacityExceeded {
        /// The fixed capacity of the container.
        capacity: usize,
    },
}

impl CollectionError {
    /// Builds an [`CollectionError::InvalidIndex`] and records the rejection.
    pub(crate) fn invalid_index(index: usize, size: usize) -> Self {
        tracing::debug!(index, size, "rejected out-of-range index");
        Self::InvalidIndex { index, size }
    }

    /// Builds a [`CollectionError::CapacityExceeded`] and records the rejection.
    pub(crate) fn capacity_exceeded(capacity: usize) -> Self {
        tracing::debug!(capacity, "rejected insert into full container");
        Self::CapacityExceeded { capacity }
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, size } => {
                write!(formatter, "invalid index {index}: valid range is 0..{size}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(formatter, "capacity of {capacity} exceeded")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

//! # Student Group Partitioner
//!
//! Splits an ordered sequence into contiguous groups of a fixed size.
//! Elements that do not fill a final group are emitted on their own as a
//! shorter last group; they are never merged into the previous group and
//! never padded.
//!
//! ```text
//! [do re me fa sol la ti do], size 3
//!   -> [do re me] [fa sol la] [ti do]
//! ```
//!
//! The borrowing form returns sub-slices of the input, so each element in
//! the output is the same object as in the input. The consuming form
//! moves elements. Neither clones.

use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PartitionError;

/// A validated, strictly positive group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct GroupSize(NonZeroUsize);

impl GroupSize {
    /// Validate a size. Zero is rejected.
    pub fn new(size: usize) -> Result<Self, PartitionError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PartitionError::InvalidArgument { group_size: 0 })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for GroupSize {
    type Error = PartitionError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        usize::try_from(size)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(PartitionError::InvalidArgument { group_size: size })
    }
}

impl From<GroupSize> for u64 {
    fn from(size: GroupSize) -> Self {
        size.get() as u64
    }
}

impl FromStr for GroupSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("group size must be a positive integer, got {s:?}"))?;
        Self::try_from(n).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for GroupSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Partition `items` into contiguous groups of `group_size`.
///
/// Empty input yields no groups. Returns
/// [`PartitionError::InvalidArgument`] when `group_size` is zero.
pub fn partition<T>(items: &[T], group_size: usize) -> Result<Vec<&[T]>, PartitionError> {
    Ok(partition_by(items, GroupSize::new(group_size)?))
}

/// Infallible form of [`partition`] for an already-validated size.
pub fn partition_by<T>(items: &[T], size: GroupSize) -> Vec<&[T]> {
    items.chunks(size.get()).collect()
}

/// Consuming form of [`partition`]: elements are moved into the groups.
pub fn partition_owned<T>(items: Vec<T>, group_size: usize) -> Result<Vec<Vec<T>>, PartitionError> {
    let size = GroupSize::new(group_size)?.get();
    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut rest = items.into_iter();
    while rest.len() > 0 {
        let take = size.min(rest.len());
        groups.push(rest.by_ref().take(take).collect());
    }
    Ok(groups)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Concatenating the groups reproduces the input exactly.
        #[test]
        fn concat_reproduces_input(items in prop::collection::vec(any::<u16>(), 0..64), k in 1usize..16) {
            let groups = partition(&items, k).unwrap();
            let joined: Vec<u16> = groups.concat();
            prop_assert_eq!(joined, items);
        }

        /// Every group is non-empty and all but the last are full.
        #[test]
        fn only_last_group_may_be_short(items in prop::collection::vec(any::<u8>(), 0..64), k in 1usize..16) {
            let groups = partition(&items, k).unwrap();
            prop_assert_eq!(groups.len(), items.len().div_ceil(k));
            if let Some((last, full)) = groups.split_last() {
                prop_assert!(full.iter().all(|g| g.len() == k));
                prop_assert!(!last.is_empty() && last.len() <= k);
            }
        }

        /// Borrowing and consuming forms agree.
        #[test]
        fn owned_matches_borrowed(items in prop::collection::vec(any::<i32>(), 0..48), k in 1usize..12) {
            let borrowed: Vec<Vec<i32>> = partition(&items, k).unwrap().into_iter().map(<[i32]>::to_vec).collect();
            let owned = partition_owned(items, k).unwrap();
            prop_assert_eq!(borrowed, owned);
        }
    }
}

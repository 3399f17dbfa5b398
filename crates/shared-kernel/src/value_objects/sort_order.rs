// crates/shared-kernel/src/value_objects/sort_order.rs
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Direction of a single ordering key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    /// `true` means descending.
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_reverses_ordering() {
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn from_bool_maps_desc_flag() {
        assert_eq!(SortOrder::from(true), SortOrder::Descending);
        assert_eq!(SortOrder::from(false), SortOrder::Ascending);
    }
}

//! Strongly typed user identifier.
//!
//! User ids are 1-based: a run with `n` users produces ids `1..=n`.  The
//! inner integer is `pub` so writers can emit it directly; use
//! [`UserId::index`] when a 0-based slot is needed.

use std::fmt;

/// Identifier of one simulated user.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserId(pub u32);

impl UserId {
    /// The first id handed out in every run.
    pub const FIRST: UserId = UserId(1);

    /// 0-based position of this user in run order.
    ///
    /// # Panics
    /// Panics in debug mode for `UserId(0)`, which is never issued.
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Ids `1..=count` in run order.
    pub fn range(count: u32) -> impl Iterator<Item = UserId> + Clone {
        (1..=count).map(UserId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

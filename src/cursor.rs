//! Cursors: detached, checked positions within a [`SkipSet`].
//!
//! A cursor pairs the identity of the container that issued it with a
//! generation-stamped node handle. Every use goes through the owning
//! container, which verifies both parts before touching a node, so a misused
//! cursor — the end position, one from another container, or one whose
//! element has since been removed — surfaces as a [`CursorError`] instead of
//! reading freed or foreign memory.
//!
//! [`SkipSet`]: crate::SkipSet

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::arena::NodeId;

// ////////////////////////////////////////////////////////////////////////////
// SetId
// ////////////////////////////////////////////////////////////////////////////

/// Process-unique identity of a [`SkipSet`](crate::SkipSet) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SetId(u64);

impl SetId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        SetId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Cursor
// ////////////////////////////////////////////////////////////////////////////

/// A position in a [`SkipSet`]: either a live element or the end position.
///
/// Cursors are small, `Copy`, and do not borrow the container; they are
/// resolved against it on every use. Two cursors are equal only if they were
/// issued by the same container *and* denote the same position — cursors
/// into different containers are never equal, even over equal elements.
///
/// A cursor stays valid across every mutation except the removal of its own
/// element. See [`SkipSet::swap`](crate::SkipSet::swap) for how cursors
/// behave when two containers exchange contents.
///
/// # Examples
///
/// ```
/// use skipset::SkipSet;
///
/// let mut set = SkipSet::new();
/// let cursor = set.insert(7);
/// assert_eq!(set.get(cursor), Ok(&7));
///
/// set.remove(cursor).unwrap();
/// assert!(set.get(cursor).is_err());
/// ```
///
/// [`SkipSet`]: crate::SkipSet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// The container that issued this cursor.
    pub(crate) set: SetId,
    /// The referenced node, or `None` for the end position.
    pub(crate) node: Option<NodeId>,
}

impl Cursor {
    /// Returns `true` if this is an end cursor.
    ///
    /// The end position carries no element; dereferencing, advancing or
    /// removing through an end cursor fails with [`CursorError::End`].
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// assert!(set.find(&3).is_end());
    ///
    /// set.insert(3);
    /// assert!(!set.find(&3).is_end());
    /// ```
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// CursorError
// ////////////////////////////////////////////////////////////////////////////

/// Errors reported when a [`Cursor`] cannot be resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CursorError {
    /// The cursor is at the end position and refers to no element.
    #[error("cursor is at the end position.")]
    End,
    /// The cursor was issued by a different container.
    #[error("cursor belongs to a different container.")]
    ForeignContainer,
    /// The element the cursor referred to has been removed.
    #[error("cursor refers to an element that has been removed.")]
    Stale,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SetId;

    #[test]
    fn ids_are_unique() {
        let a = SetId::next();
        let b = SetId::next();
        assert_ne!(a, b);
        assert_eq!(a, a);
    }
}

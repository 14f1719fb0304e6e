use core::fmt;

use crate::{ForwardList, Node};

/// A cursor over a [`ForwardList`].
///
/// Cursors point to an element in the list. There is an extra "ghost" element after the back,
/// which moves on to the front, making it circular.
pub struct Cursor<'a, T> {
    pub(crate) current: Option<Node>,
    pub(crate) list: &'a ForwardList<T>,
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Moves the cursor to the next element.
    ///
    /// If the cursor is on the "ghost" element, this moves to the front of the list.
    /// If the cursor is at the back of the list, this moves to the "ghost" element.
    pub fn move_next(&mut self) {
        self.current = match self.current {
            None => self.list.front_node(),
            Some(node) => self.list.next(node),
        }
    }

    #[must_use]
    /// Gets a reference to the current element.
    ///
    /// If the cursor is pointing to the "ghost" element, this returns [`None`].
    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        list.get(self.current?)
    }

    #[must_use]
    #[inline]
    /// Gets the handle of the current node.
    ///
    /// If the cursor is pointing to the "ghost" element, this returns [`None`].
    pub const fn node(&self) -> Option<Node> {
        self.current
    }

    #[must_use]
    /// Gets a reference to the element after the current one, without moving.
    ///
    /// If the cursor is on the "ghost" element, this is the front of the list.
    pub fn peek_next(&self) -> Option<&'a T> {
        let list = self.list;
        let next = match self.current {
            None => list.front_node(),
            Some(node) => list.next(node),
        };
        list.get(next?)
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the underlying list.
    pub const fn as_list(&self) -> &'a ForwardList<T> {
        self.list
    }
}

impl<T> fmt::Debug for Cursor<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.list)
            .field(&self.current())
            .finish()
    }
}

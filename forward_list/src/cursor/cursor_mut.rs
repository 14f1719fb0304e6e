use core::fmt;

use crate::{ForwardList, Node};

use super::Cursor;

/// A mutable cursor over a [`ForwardList`].
///
/// Cursors point to an element in the list. There is an extra "ghost" element after the back,
/// which moves on to the front, making it circular.
pub struct CursorMut<'a, T> {
    pub(crate) current: Option<Node>,
    pub(crate) list: &'a mut ForwardList<T>,
}

impl<T> CursorMut<'_, T> {
    #[must_use]
    #[inline]
    /// Gets an immutable cursor over the list.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current,
            list: self.list,
        }
    }

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
    /// Gets a mutable reference to the current element.
    ///
    /// If the cursor is pointing to the "ghost" element, this returns [`None`].
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.current?)
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
    #[inline]
    /// Returns a reference to the underlying list.
    pub const fn as_list(&self) -> &ForwardList<T> {
        self.list
    }

    /// Inserts `value` after the current node and returns the new node.
    ///
    /// The cursor does not move. If the cursor is on the "ghost" element, this inserts at the
    /// front of the list.
    pub fn insert_after(&mut self, value: T) -> Node {
        match self.current {
            None => self.list.push_front_node(value),
            Some(node) => self.list.insert_after(node, value),
        }
    }

    /// Inserts `value` after the current node and moves the cursor onto it.
    ///
    /// Repeated calls insert a run of values in call order.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let mut list = ForwardList::from([1, 5]);
    /// let mut cursor = list.cursor_front_mut();
    /// for value in 2..5 {
    ///     cursor.insert_after_and_advance(value);
    /// }
    /// assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_after_and_advance(&mut self, value: T) {
        self.current = Some(self.insert_after(value));
    }

    /// Removes the node after the current one and returns its value.
    ///
    /// If the cursor is on the "ghost" element, this removes the front of the list.
    /// If the cursor is at the back of the list, this returns [`None`].
    pub fn remove_next(&mut self) -> Option<T> {
        match self.current {
            None => self.list.pop_front(),
            Some(node) => self.list.remove_after(node),
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.list)
            .field(&self.as_cursor().current())
            .finish()
    }
}

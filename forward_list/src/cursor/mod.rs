#[allow(clippy::module_inception)]
mod cursor;
mod cursor_mut;

pub use cursor::Cursor;
pub use cursor_mut::CursorMut;

use crate::ForwardList;

impl<T> ForwardList<T> {
    #[must_use]
    #[inline]
    /// Gets a cursor pointing to the front of the list.
    ///
    /// If the list is empty, the cursor points to the "ghost" element.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.front_node(),
            list: self,
        }
    }

    #[must_use]
    #[inline]
    /// Gets a mutable cursor pointing to the front of the list.
    ///
    /// If the list is empty, the cursor points to the "ghost" element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.front_node(),
            list: self,
        }
    }

    #[must_use]
    /// Gets a cursor pointing to the node at position `index`.
    ///
    /// If `index` is not less than the length of the list, this returns [`None`].
    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, T>> {
        let current = self.node_at(index)?;
        Some(Cursor {
            current: Some(current),
            list: self,
        })
    }

    #[must_use]
    /// Gets a mutable cursor pointing to the node at position `index`.
    ///
    /// If `index` is not less than the length of the list, this returns [`None`].
    pub fn cursor_at_mut(&mut self, index: usize) -> Option<CursorMut<'_, T>> {
        let current = self.node_at(index)?;
        Some(CursorMut {
            current: Some(current),
            list: self,
        })
    }
}

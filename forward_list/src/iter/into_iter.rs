use core::iter::FusedIterator;

use crate::ForwardList;

/// An iterator over owned elements of a [`ForwardList`].
///
/// This is created by [`ForwardList::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    #[must_use]
    #[inline]
    pub(crate) const fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }

    #[must_use]
    #[inline]
    /// Gets a reference to the remainder of the [`ForwardList`].
    pub const fn remainder(&self) -> &ForwardList<T> {
        &self.list
    }

    #[must_use]
    #[inline]
    /// Converts the remaining iterator to a [`ForwardList`].
    pub fn take_remainder(self) -> ForwardList<T> {
        self.list
    }
}

impl<T> Default for IntoIter<T> {
    #[inline]
    fn default() -> Self {
        Self::new(ForwardList::default())
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

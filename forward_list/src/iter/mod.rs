use core::iter::FusedIterator;

mod into_iter;

pub use into_iter::IntoIter;

use crate::{ForwardList, Node};

/// An iterator over references to the elements of a [`ForwardList`].
///
/// This is created by [`ForwardList::iter`].
pub struct Iter<'a, T> {
    list: &'a ForwardList<T>,
    current: Option<Node>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[must_use]
    #[inline]
    pub(crate) fn new(list: &'a ForwardList<T>) -> Self {
        Self {
            list,
            current: list.front_node(),
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let (link, value) = list.nodes.get(self.current?).ok()?;

        self.current = link.next;
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Item> Extend<Item> for ForwardList<Item> {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, Item> Extend<&'a Item> for ForwardList<Item>
where
    Item: Copy,
{
    fn extend<T: IntoIterator<Item = &'a Item>>(&mut self, iter: T) {
        for item in iter.into_iter().copied() {
            self.push_back(item);
        }
    }
}

impl<Item> FromIterator<Item> for ForwardList<Item> {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

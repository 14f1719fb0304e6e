#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

pub mod cursor;
mod ends;
pub mod iter;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod splice;

use iter::Iter;
pub use node::Node;
use node::{Link, Nodes};
pub use nodearena::{NodeError, NodeErrorKind};

#[derive(Clone, Copy)]
struct Ends {
    front: Node,
    back: Node,
}

/// A singly-linked list.
///
/// Nodes live in an arena owned by the list and are addressed by [`Node`] handles. Handles can
/// be kept and passed back to [`Self::insert_after`] and [`Self::remove_after`]; a handle from
/// another list, or one whose node has been removed, is rejected instead of corrupting the list.
pub struct ForwardList<T> {
    ends: Option<Ends>,
    nodes: Nodes<T>,
}

impl<T> ForwardList<T> {
    #[must_use]
    #[inline]
    /// Creates an empty [`ForwardList`].
    pub fn new() -> Self {
        Self {
            ends: None,
            nodes: Nodes::new(),
        }
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the list has no elements.
    pub const fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every element from the list.
    ///
    /// All handles to the list's nodes become invalid.
    pub fn clear(&mut self) {
        self.ends = None;
        self.nodes.clear();
    }

    #[must_use]
    #[inline]
    /// Gets the handle of the first node.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn front_node(&self) -> Option<Node> {
        self.ends.map(|Ends { front, .. }| front)
    }

    #[must_use]
    #[inline]
    /// Gets the handle of the last node.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn back_node(&self) -> Option<Node> {
        self.ends.map(|Ends { back, .. }| back)
    }

    #[must_use]
    /// Gets a reference to the element at the front of the list.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn front(&self) -> Option<&T> {
        self.get(self.front_node()?)
    }

    #[must_use]
    /// Gets a reference to the element at the back of the list.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn back(&self) -> Option<&T> {
        self.get(self.back_node()?)
    }

    #[must_use]
    /// Gets a mutable reference to the element at the front of the list.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.front_node()?)
    }

    #[must_use]
    /// Gets a mutable reference to the element at the back of the list.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.back_node()?)
    }

    #[must_use]
    #[inline]
    /// Gets a reference to the element in `node`.
    ///
    /// If `node` is not in this list, this returns [`None`].
    pub fn get(&self, node: Node) -> Option<&T> {
        self.nodes.value(node).ok()
    }

    #[must_use]
    #[inline]
    /// Gets a mutable reference to the element in `node`.
    ///
    /// If `node` is not in this list, this returns [`None`].
    pub fn get_mut(&mut self, node: Node) -> Option<&mut T> {
        self.nodes.value_mut(node).ok()
    }

    #[must_use]
    #[inline]
    /// Gets the node following `node`.
    ///
    /// If `node` is the last node, or is not in this list, this returns [`None`].
    pub fn next(&self, node: Node) -> Option<Node> {
        self.nodes.header(node).ok()?.next
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if `node` is a node of this list.
    pub fn contains_node(&self, node: Node) -> bool {
        self.nodes.contains(node)
    }

    #[must_use]
    /// Gets the node at position `index`, counting from zero at the front.
    ///
    /// If `index` is not less than the length of the list, this returns [`None`].
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let list = ForwardList::from([4, 3, 1, 2]);
    ///
    /// let node = list.node_at(2).unwrap();
    /// assert_eq!(list.get(node), Some(&1));
    /// assert!(list.node_at(4).is_none());
    /// ```
    pub fn node_at(&self, index: usize) -> Option<Node> {
        let mut current = self.front_node();
        for _ in 0..index {
            current = self.next_linked(current?);
        }
        current
    }

    #[must_use]
    #[inline]
    /// Gets an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[must_use]
    /// Copies the elements into a [`Vec`], from front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Follows the link out of a node that is known to be in the list.
    fn next_linked(&self, node: Node) -> Option<Node> {
        let link = self.nodes.header(node);
        debug_assert!(link.is_ok(), "linked node is missing from the list");
        link.ok().and_then(|link| link.next)
    }

    /// Gets the link of a node that is known to be in the list.
    fn link_mut(&mut self, node: Node) -> &mut Link {
        NodeError::unwrap_result(self.nodes.header_mut(node))
    }

    #[cfg(test)]
    /// Walks the list and checks the head, tail and length agree with the links.
    fn check_debug(&self) {
        let Some(Ends { front, back }) = self.ends else {
            assert_eq!(self.nodes.len(), 0);
            return;
        };

        let mut len: usize = 1;
        let mut node = front;

        while let Some(next) = self.nodes.header(node).unwrap().next {
            len += 1;
            assert!(len <= self.nodes.len(), "the links form a cycle");
            node = next;
        }

        assert_eq!(node, back);
        assert_eq!(len, self.nodes.len());
    }
}

impl<T> Default for ForwardList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ForwardList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> PartialEq for ForwardList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for ForwardList<T> where T: Eq {}

impl<T> fmt::Debug for ForwardList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for ForwardList<T>
where
    T: fmt::Display,
{
    /// Renders the elements from front to back, separated by `" -> "`.
    ///
    /// An empty list renders as `Empty list`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return f.write_str("Empty list");
        };

        fmt::Display::fmt(first, f)?;
        for value in iter {
            f.write_str(" -> ")?;
            fmt::Display::fmt(value, f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use alloc::{format, vec, vec::Vec};

    use crate::ForwardList;

    #[test]
    fn empty() {
        let list = ForwardList::<u8>::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        assert!(list.node_at(0).is_none());
        list.check_debug();
    }

    #[test]
    fn node_at() {
        let list = ForwardList::from([10, 20, 30]);

        for (index, expected) in [10, 20, 30].iter().enumerate() {
            let node = list.node_at(index).unwrap();
            assert_eq!(list.get(node), Some(expected));
        }
        assert!(list.node_at(3).is_none());
        assert!(list.node_at(usize::MAX).is_none());

        assert_eq!(list.node_at(0), list.front_node());
        assert_eq!(list.node_at(2), list.back_node());
    }

    #[test]
    fn next_follows_links() {
        let list = ForwardList::from(['a', 'b']);

        let front = list.front_node().unwrap();
        let back = list.next(front).unwrap();
        assert_eq!(list.get(back), Some(&'b'));
        assert!(list.next(back).is_none());
    }

    #[test]
    fn ends_mut() {
        let mut list = ForwardList::from([1, 2, 3]);

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;

        assert_eq!(list.to_vec(), vec![10, 2, 30]);
    }

    #[test]
    fn clear_invalidates_nodes() {
        let mut list = ForwardList::from([1, 2]);
        let node = list.front_node().unwrap();

        list.clear();
        list.check_debug();
        assert!(list.is_empty());
        assert!(!list.contains_node(node));

        list.push_back(3);
        assert!(list.get(node).is_none());
        assert_eq!(list.to_vec(), vec![3]);
    }

    #[test]
    fn display() {
        let mut list = ForwardList::new();
        assert_eq!(format!("{list}"), "Empty list");

        list.push_back(1);
        assert_eq!(format!("{list}"), "1");

        list.push_back(2);
        list.push_front(3);
        assert_eq!(format!("{list}"), "3 -> 1 -> 2");
        assert_eq!(format!("{list:?}"), "[3, 1, 2]");
    }

    #[test]
    fn clone_and_eq() {
        let list = ForwardList::from([1, 2, 3]);
        let copy = list.clone();

        assert_eq!(list, copy);
        assert!(!copy.contains_node(list.front_node().unwrap()));

        let shorter: ForwardList<_> = [1, 2].into_iter().collect();
        assert_ne!(list, shorter);
    }

    #[test]
    fn send_and_sync() {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForwardList<u8>>();
    }

    #[test]
    fn to_vec_is_front_to_back() {
        let list: ForwardList<_> = (0..5).collect();
        assert_eq!(list.to_vec(), (0..5).collect::<Vec<_>>());
    }
}

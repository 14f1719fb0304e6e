use crate::{node::Link, ForwardList, Node, NodeError};

impl<T> ForwardList<T> {
    /// Attempts to insert `value` directly after `node` and returns the new node.
    ///
    /// If `node` is the back of the list, this is the same as [`Self::push_back`].
    /// Passing the returned node to the next call inserts a run of values in call order.
    ///
    /// # Errors
    /// If `node` is not in this list, this returns a [`NodeError`] holding `value` and the list is
    /// left unchanged.
    pub fn try_insert_after(&mut self, node: Node, value: T) -> Result<Node, NodeError<T>> {
        let next = match self.nodes.header(node) {
            Ok(link) => link.next,
            Err(error) => return Err(error.with_value(value)),
        };

        if self.back_node() == Some(node) {
            debug_assert!(next.is_none());
            return Ok(self.push_back_node(value));
        }
        debug_assert!(next.is_some());

        let new = self.nodes.insert(Link { next }, value);
        self.link_mut(node).next = Some(new);
        Ok(new)
    }

    /// Inserts `value` directly after `node` and returns the new node.
    ///
    /// If `node` is the back of the list, this is the same as [`Self::push_back`].
    ///
    /// # Panics
    /// Panics if `node` is not in this list. See [`Self::try_insert_after`] for a non-panicking
    /// version.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let mut list = ForwardList::from([4, 3, 1, 2]);
    ///
    /// let mut node = list.node_at(1).unwrap();
    /// for value in [7, 8, 9] {
    ///     node = list.insert_after(node, value);
    /// }
    ///
    /// assert_eq!(list.to_vec(), [4, 3, 7, 8, 9, 1, 2]);
    /// ```
    #[track_caller]
    pub fn insert_after(&mut self, node: Node, value: T) -> Node {
        NodeError::unwrap_result(self.try_insert_after(node, value))
    }

    /// Attempts to remove the node directly after `node` and returns its value.
    ///
    /// If `node` is the back of the list, there is nothing to remove and this returns `Ok(None)`.
    ///
    /// # Errors
    /// If `node` is not in this list, this returns a [`NodeError`] and the list is left unchanged.
    pub fn try_remove_after(&mut self, node: Node) -> Result<Option<T>, NodeError> {
        let Some(removed) = self.nodes.header(node)?.next else {
            return Ok(None);
        };

        let (link, value) = NodeError::unwrap_result(self.nodes.remove(removed));
        self.link_mut(node).next = link.next;

        if let Some(ends) = self.ends.as_mut() {
            if ends.back == removed {
                debug_assert!(link.next.is_none());
                ends.back = node;
            }
        }

        Ok(Some(value))
    }

    /// Removes the node directly after `node` and returns its value.
    ///
    /// If `node` is the back of the list, this returns [`None`].
    ///
    /// # Panics
    /// Panics if `node` is not in this list. See [`Self::try_remove_after`] for a non-panicking
    /// version.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let mut list = ForwardList::from([3, 1]);
    ///
    /// let front = list.node_at(0).unwrap();
    /// assert_eq!(list.remove_after(front), Some(1));
    /// assert_eq!(list.remove_after(front), None);
    /// assert_eq!(list.to_vec(), [3]);
    /// ```
    #[track_caller]
    pub fn remove_after(&mut self, node: Node) -> Option<T> {
        NodeError::unwrap_result(self.try_remove_after(node))
    }
}

#[cfg(test)]
mod test {
    use alloc::vec;

    use crate::{ForwardList, NodeErrorKind};

    #[test]
    fn insert_after_middle() {
        let mut list = ForwardList::from([1, 3]);
        let front = list.front_node().unwrap();

        let node = list.insert_after(front, 2);
        list.check_debug();

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.get(node), Some(&2));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn insert_after_back_moves_tail() {
        let mut list = ForwardList::from([1]);
        let back = list.back_node().unwrap();

        let node = list.insert_after(back, 2);
        list.check_debug();

        assert_eq!(list.back_node(), Some(node));
        list.push_back(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn chained_insert_keeps_call_order() {
        let mut list = ForwardList::from([4, 3, 1, 2]);

        let mut node = list.node_at(1).unwrap();
        for _ in 0..4 {
            node = list.insert_after(node, -1);
            list.check_debug();
        }

        assert_eq!(list.to_vec(), vec![4, 3, -1, -1, -1, -1, 1, 2]);

        let mut node = list.back_node().unwrap();
        for value in 5..8 {
            node = list.insert_after(node, value);
        }
        list.check_debug();
        assert_eq!(list.to_vec(), vec![4, 3, -1, -1, -1, -1, 1, 2, 5, 6, 7]);
        assert_eq!(list.back_node(), Some(node));
    }

    #[test]
    fn remove_after_middle() {
        let mut list = ForwardList::from([1, 2, 3]);
        let front = list.front_node().unwrap();

        assert_eq!(list.remove_after(front), Some(2));
        list.check_debug();
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn remove_after_moves_tail_back() {
        let mut list = ForwardList::from([3, 1]);
        let front = list.node_at(0).unwrap();

        assert_eq!(list.remove_after(front), Some(1));
        list.check_debug();
        assert_eq!(list.to_vec(), vec![3]);
        assert_eq!(list.back_node(), Some(front));

        list.push_back(4);
        list.check_debug();
        assert_eq!(list.to_vec(), vec![3, 4]);
    }

    #[test]
    fn remove_after_back_is_none() {
        let mut list = ForwardList::from([1, 2]);
        let back = list.back_node().unwrap();

        assert_eq!(list.remove_after(back), None);
        assert_eq!(list.len(), 2);
        list.check_debug();
    }

    #[test]
    fn removed_node_is_stale() {
        let mut list = ForwardList::from([1, 2, 3]);
        let front = list.front_node().unwrap();
        let middle = list.next(front).unwrap();

        assert_eq!(list.remove_after(front), Some(2));

        let error = list.try_insert_after(middle, 9).unwrap_err();
        assert_eq!(error.kind(), NodeErrorKind::Stale);
        assert_eq!(error.into_value(), 9);

        assert_eq!(
            list.try_remove_after(middle).unwrap_err().kind(),
            NodeErrorKind::Stale
        );
        assert!(list.get(middle).is_none());

        list.check_debug();
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[test]
    fn foreign_node_is_rejected() {
        let mut list = ForwardList::from([1, 2]);
        let other = ForwardList::from([1, 2]);
        let foreign = other.front_node().unwrap();

        let error = list.try_insert_after(foreign, 3).unwrap_err();
        assert_eq!(error.kind(), NodeErrorKind::Foreign);
        assert_eq!(
            list.try_remove_after(foreign).unwrap_err().kind(),
            NodeErrorKind::Foreign
        );

        list.check_debug();
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "node belongs to a different structure")]
    fn insert_after_foreign_panics() {
        let mut list = ForwardList::from([1]);
        let other = ForwardList::from([1]);

        list.insert_after(other.front_node().unwrap(), 2);
    }

    #[test]
    #[should_panic(expected = "node has been removed")]
    fn remove_after_stale_panics() {
        let mut list = ForwardList::from([1, 2]);
        let front = list.front_node().unwrap();
        assert_eq!(list.pop_front(), Some(1));

        list.remove_after(front);
    }
}

use crate::{node::Link, Ends, ForwardList, Node, NodeError};

impl<T> ForwardList<T> {
    /// Pushes `value` to the front of the list.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let mut list = ForwardList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.to_vec(), [2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.push_front_node(value);
    }

    /// Pushes `value` to the back of the list.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let mut list = ForwardList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.to_vec(), [1, 2]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.push_back_node(value);
    }

    pub(crate) fn push_front_node(&mut self, value: T) -> Node {
        let next = self.front_node();
        let node = self.nodes.insert(Link { next }, value);

        self.ends = Some(match self.ends {
            Some(Ends { back, .. }) => Ends { front: node, back },
            None => Ends {
                front: node,
                back: node,
            },
        });

        node
    }

    pub(crate) fn push_back_node(&mut self, value: T) -> Node {
        let Some(Ends { front, back }) = self.ends else {
            return self.push_front_node(value);
        };

        let node = self.nodes.insert(Link { next: None }, value);

        let link = self.link_mut(back);
        debug_assert!(link.next.is_none());
        link.next = Some(node);

        self.ends = Some(Ends { front, back: node });
        node
    }

    #[must_use = "use `delete_front` if the value is not needed"]
    /// Removes the front value from the list and returns it.
    ///
    /// If the list is empty, this returns [`None`].
    pub fn pop_front(&mut self) -> Option<T> {
        let Ends { front, back } = self.ends?;
        let (link, value) = NodeError::unwrap_result(self.nodes.remove(front));

        self.ends = match link.next {
            Some(next) => Some(Ends { front: next, back }),
            None => {
                debug_assert_eq!(front, back);
                None
            }
        };

        Some(value)
    }

    #[inline]
    /// Deletes and drops the value at the front of the list.
    ///
    /// Returns [`true`] if a value was removed and [`false`] if the list was empty.
    pub fn delete_front(&mut self) -> bool {
        self.pop_front().is_some()
    }

    #[must_use = "use `delete_back` if the value is not needed"]
    /// Removes the back value from the list and returns it.
    ///
    /// If the list is empty, this returns [`None`].
    /// As nodes only link forwards, this walks the whole list.
    ///
    /// # Examples
    /// ```
    /// # use forward_list::ForwardList;
    /// let mut list = ForwardList::from([3, 1, 2]);
    /// assert_eq!(list.remove_last(), Some(2));
    /// assert_eq!(list.to_vec(), [3, 1]);
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        let Ends { front, back } = self.ends?;
        if front == back {
            return self.pop_front();
        }

        let mut previous = front;
        let mut current = front;
        while let Some(next) = self.next_linked(current) {
            previous = current;
            current = next;
        }
        debug_assert_eq!(current, back);

        self.link_mut(previous).next = None;
        self.ends = Some(Ends {
            front,
            back: previous,
        });

        let (_, value) = NodeError::unwrap_result(self.nodes.remove(current));
        Some(value)
    }

    #[inline]
    /// Deletes and drops the value at the back of the list.
    ///
    /// Returns [`true`] if a value was removed and [`false`] if the list was empty.
    pub fn delete_back(&mut self) -> bool {
        self.remove_last().is_some()
    }
}

#[cfg(test)]
mod test {
    use alloc::vec;

    use crate::ForwardList;

    #[test]
    fn push_back_keeps_order() {
        let mut list = ForwardList::new();
        for value in 1..=5 {
            list.push_back(value);
            list.check_debug();
        }

        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn push_front_reverses_order() {
        let mut list = ForwardList::new();
        for value in 1..=5 {
            list.push_front(value);
            list.check_debug();
        }

        assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.back(), Some(&1));
    }

    #[test]
    fn mixed_pushes() {
        let mut list = ForwardList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(3);
        list.push_front(4);

        list.check_debug();
        assert_eq!(list.to_vec(), vec![4, 3, 1, 2]);
    }

    #[test]
    fn pop_front() {
        let mut list = ForwardList::from([4, 3, 1, 2]);

        assert_eq!(list.pop_front(), Some(4));
        list.check_debug();
        assert_eq!(list.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn pop_front_to_empty() {
        let mut list = ForwardList::from([1]);

        assert_eq!(list.pop_front(), Some(1));
        list.check_debug();
        assert!(list.is_empty());
        assert!(list.back_node().is_none());
        assert_eq!(list.pop_front(), None);

        list.push_back(2);
        list.check_debug();
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn pop_then_push_restores() {
        let mut list = ForwardList::from(['a', 'b', 'c']);
        let before = list.clone();

        let value = list.pop_front().unwrap();
        list.push_front(value);

        list.check_debug();
        assert_eq!(list, before);
    }

    #[test]
    fn remove_last() {
        let mut list = ForwardList::from([3, 1, 2]);

        assert_eq!(list.remove_last(), Some(2));
        list.check_debug();
        assert_eq!(list.to_vec(), vec![3, 1]);
        assert_eq!(list.back(), Some(&1));

        list.push_back(5);
        list.check_debug();
        assert_eq!(list.to_vec(), vec![3, 1, 5]);
    }

    #[test]
    fn remove_last_matches_back() {
        let mut list: ForwardList<_> = (0..6).collect();

        while !list.is_empty() {
            let expected = list.to_vec().last().copied();
            let len = list.len();

            assert_eq!(list.remove_last(), expected);
            assert_eq!(list.len(), len - 1);
            list.check_debug();
        }

        assert_eq!(list.remove_last(), None);
    }

    #[test]
    fn delete() {
        let mut list = ForwardList::from([1, 2]);

        assert!(list.delete_back());
        assert!(list.delete_front());
        assert!(!list.delete_front());
        assert!(!list.delete_back());
        list.check_debug();
    }

    #[test]
    fn empty_state_tracks_net_insertions() {
        let mut list = ForwardList::new();
        assert!(list.is_empty());

        list.push_back(1);
        list.push_front(0);
        assert!(!list.is_empty());

        assert!(list.remove_last().is_some());
        assert!(!list.is_empty());
        assert!(list.pop_front().is_some());
        assert!(list.is_empty());
        list.check_debug();
    }
}

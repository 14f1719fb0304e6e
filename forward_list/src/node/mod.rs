use nodearena::{NodeArena, NodeHandle};

/// A handle to a node in a [`ForwardList`](crate::ForwardList).
///
/// Handles are returned by [`ForwardList::node_at`](crate::ForwardList::node_at),
/// [`ForwardList::insert_after`](crate::ForwardList::insert_after) and the cursors. They are only
/// valid for the list that issued them, until their node is removed.
pub type Node = NodeHandle;

/// The link data stored next to each value.
pub struct Link {
    pub next: Option<Node>,
}

pub type Nodes<T> = NodeArena<Link, T>;

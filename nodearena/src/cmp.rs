use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{ArenaId, NodeHandle};

impl NodeHandle {
    #[inline]
    const fn key(self) -> (ArenaId, usize, usize) {
        (self.arena, self.index, self.generation)
    }
}

impl PartialEq for NodeHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl PartialEq<Option<Self>> for NodeHandle {
    #[inline]
    fn eq(&self, other: &Option<Self>) -> bool {
        other.is_some_and(|other| self.eq(&other))
    }
}

impl Eq for NodeHandle {}

impl PartialOrd for NodeHandle {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeHandle {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for NodeHandle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

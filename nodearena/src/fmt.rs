use core::fmt::{Debug, Formatter, Result};

use crate::{ArenaId, NodeArena, NodeHandle};

impl Debug for ArenaId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple("ArenaId").field(&self.0).finish()
    }
}

impl Debug for NodeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("NodeHandle")
            .field("arena", &self.arena.0)
            .field("index", &self.index)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<Header, T> Debug for NodeArena<Header, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("NodeArena")
            .field("id", &self.id)
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

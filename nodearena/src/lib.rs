#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use alloc::vec::Vec;
use core::{
    mem,
    sync::atomic::{AtomicUsize, Ordering},
};

mod cmp;
mod errors;
mod fmt;
pub use errors::{NodeError, NodeErrorKind};

/// Identifies a single [`NodeArena`].
///
/// Every arena gets a fresh id when it is created or cleared, so handles can never be confused
/// between arenas.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArenaId(usize);

impl ArenaId {
    fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a node in a [`NodeArena`].
///
/// Handles are plain values: copying one does not copy the node. A handle stays valid until the
/// node it refers to is removed, after which every operation taking it reports
/// [`NodeErrorKind::Stale`].
#[derive(Clone, Copy)]
pub struct NodeHandle {
    arena: ArenaId,
    index: usize,
    generation: usize,
}

impl NodeHandle {
    #[must_use]
    #[inline]
    /// Gets the id of the arena that created the handle.
    pub const fn arena(self) -> ArenaId {
        self.arena
    }

    #[must_use]
    #[inline]
    /// Gets the slot index of the node.
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    #[inline]
    /// Gets the generation of the slot when the node was inserted.
    pub const fn generation(self) -> usize {
        self.generation
    }
}

enum Slot<Header, T> {
    Occupied {
        generation: usize,
        header: Header,
        value: T,
    },
    Vacant {
        generation: usize,
        next_free: Option<usize>,
    },
}

/// Storage for nodes that carry a `Header` (link data) next to their value.
///
/// Removed slots are kept on a free list and reused by later insertions with a bumped generation.
pub struct NodeArena<Header, T> {
    id: ArenaId,
    slots: Vec<Slot<Header, T>>,
    free: Option<usize>,
    len: usize,
}

impl<Header, T> NodeArena<Header, T> {
    #[must_use]
    /// Creates an empty [`NodeArena`] with a fresh id.
    pub fn new() -> Self {
        Self {
            id: ArenaId::next(),
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    #[must_use]
    #[inline]
    /// Gets the id of the arena.
    pub const fn id(&self) -> ArenaId {
        self.id
    }

    #[must_use]
    #[inline]
    /// Gets the number of nodes in the arena.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the arena holds no nodes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a node and returns its handle.
    pub fn insert(&mut self, header: Header, value: T) -> NodeHandle {
        self.len += 1;

        if let Some(index) = self.free {
            let slot = &mut self.slots[index];
            let Slot::Vacant {
                generation,
                next_free,
            } = *slot
            else {
                unreachable!("free list points at an occupied slot");
            };

            self.free = next_free;
            *slot = Slot::Occupied {
                generation,
                header,
                value,
            };

            return NodeHandle {
                arena: self.id,
                index,
                generation,
            };
        }

        let index = self.slots.len();
        self.slots.push(Slot::Occupied {
            generation: 0,
            header,
            value,
        });

        NodeHandle {
            arena: self.id,
            index,
            generation: 0,
        }
    }

    /// Removes the node and returns its header and value.
    ///
    /// # Errors
    /// If the handle belongs to another arena or its node has already been removed, this returns
    /// a [`NodeError`] and the arena is left unchanged.
    pub fn remove(&mut self, handle: NodeHandle) -> Result<(Header, T), NodeError> {
        self.check(handle)?;

        let slot = &mut self.slots[handle.index];
        let vacant = Slot::Vacant {
            generation: handle.generation.wrapping_add(1),
            next_free: self.free,
        };

        match mem::replace(slot, vacant) {
            Slot::Occupied { header, value, .. } => {
                self.free = Some(handle.index);
                self.len -= 1;
                Ok((header, value))
            }
            Slot::Vacant { .. } => unreachable!("checked handle points at a vacant slot"),
        }
    }

    /// Gets references to the header and value of the node.
    ///
    /// # Errors
    /// If the handle belongs to another arena or its node has been removed, this returns a
    /// [`NodeError`].
    pub fn get(&self, handle: NodeHandle) -> Result<(&Header, &T), NodeError> {
        if handle.arena != self.id {
            return Err(NodeError::new(NodeErrorKind::Foreign, handle));
        }

        match self.slots.get(handle.index) {
            Some(Slot::Occupied {
                generation,
                header,
                value,
            }) if *generation == handle.generation => Ok((header, value)),
            _ => Err(NodeError::new(NodeErrorKind::Stale, handle)),
        }
    }

    /// Gets mutable references to the header and value of the node.
    ///
    /// # Errors
    /// If the handle belongs to another arena or its node has been removed, this returns a
    /// [`NodeError`].
    pub fn get_mut(&mut self, handle: NodeHandle) -> Result<(&mut Header, &mut T), NodeError> {
        if handle.arena != self.id {
            return Err(NodeError::new(NodeErrorKind::Foreign, handle));
        }

        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied {
                generation,
                header,
                value,
            }) if *generation == handle.generation => Ok((header, value)),
            _ => Err(NodeError::new(NodeErrorKind::Stale, handle)),
        }
    }

    #[inline]
    /// Gets a reference to the header of the node.
    ///
    /// # Errors
    /// See [`Self::get`].
    pub fn header(&self, handle: NodeHandle) -> Result<&Header, NodeError> {
        self.get(handle).map(|(header, _)| header)
    }

    #[inline]
    /// Gets a mutable reference to the header of the node.
    ///
    /// # Errors
    /// See [`Self::get_mut`].
    pub fn header_mut(&mut self, handle: NodeHandle) -> Result<&mut Header, NodeError> {
        self.get_mut(handle).map(|(header, _)| header)
    }

    #[inline]
    /// Gets a reference to the value of the node.
    ///
    /// # Errors
    /// See [`Self::get`].
    pub fn value(&self, handle: NodeHandle) -> Result<&T, NodeError> {
        self.get(handle).map(|(_, value)| value)
    }

    #[inline]
    /// Gets a mutable reference to the value of the node.
    ///
    /// # Errors
    /// See [`Self::get_mut`].
    pub fn value_mut(&mut self, handle: NodeHandle) -> Result<&mut T, NodeError> {
        self.get_mut(handle).map(|(_, value)| value)
    }

    /// Checks that `handle` refers to a live node in this arena.
    ///
    /// # Errors
    /// See [`Self::get`].
    pub fn check(&self, handle: NodeHandle) -> Result<(), NodeError> {
        self.get(handle).map(|_| ())
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if `handle` refers to a live node in this arena.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.check(handle).is_ok()
    }

    /// Removes every node.
    ///
    /// The arena takes a fresh id, so all handles issued before the call become
    /// [`NodeErrorKind::Foreign`].
    pub fn clear(&mut self) {
        self.id = ArenaId::next();
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<Header, T> Default for NodeArena<Header, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

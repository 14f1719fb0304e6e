use core::{error::Error, fmt};

use crate::NodeHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The reason a [`NodeHandle`] was rejected.
pub enum NodeErrorKind {
    /// The handle was issued by a different arena.
    Foreign,
    /// The node the handle referred to has been removed.
    Stale,
}

#[derive(Clone, PartialEq, Eq)]
/// The error type returned when a [`NodeHandle`] does not refer to a live node.
///
/// Operations that consume a value can hand it back through the error, so nothing is lost when
/// the handle is rejected.
pub struct NodeError<Value = ()> {
    kind: NodeErrorKind,
    handle: NodeHandle,
    value: Value,
}

impl NodeError {
    #[must_use]
    #[inline]
    /// Creates a new error for `handle`.
    pub const fn new(kind: NodeErrorKind, handle: NodeHandle) -> Self {
        Self {
            kind,
            handle,
            value: (),
        }
    }

    #[inline]
    /// Places a value into the error.
    pub const fn with_value<Value>(self, value: Value) -> NodeError<Value> {
        NodeError {
            kind: self.kind,
            handle: self.handle,
            value,
        }
    }
}

impl<Value> NodeError<Value> {
    #[must_use]
    #[inline]
    /// Gets the reason the handle was rejected.
    pub const fn kind(&self) -> NodeErrorKind {
        self.kind
    }

    #[must_use]
    #[inline]
    /// Gets the rejected handle.
    pub const fn handle(&self) -> NodeHandle {
        self.handle
    }

    #[inline]
    /// Gets the value held in the error.
    ///
    /// This is usually the value that was going to be inserted.
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    /// Seperates the value from the error.
    pub fn into_parts(self) -> (Value, NodeError) {
        (
            self.value,
            NodeError {
                kind: self.kind,
                handle: self.handle,
                value: (),
            },
        )
    }

    #[inline]
    /// Applies a function `f` to the value.
    ///
    /// This maps from a [`NodeError<Value>`] to a [`NodeError<U>`].
    pub fn map<U, F>(self, f: F) -> NodeError<U>
    where
        F: FnOnce(Value) -> U,
    {
        let (value, empty) = self.into_parts();
        empty.with_value(f(value))
    }

    #[track_caller]
    /// Handles the error by panicking with its message.
    pub fn handle_error(self) -> ! {
        panic!("{self}")
    }

    #[inline]
    #[track_caller]
    /// Unwraps the result using [`Self::handle_error`] when it is an error.
    pub fn unwrap_result<T>(result: Result<T, Self>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => error.handle_error(),
        }
    }
}

impl fmt::Display for NodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Foreign => "node belongs to a different structure",
            Self::Stale => "node has been removed",
        })
    }
}

impl<Value> fmt::Debug for NodeError<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeError")
            .field("kind", &self.kind)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl<Value> fmt::Display for NodeError<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.handle)
    }
}

impl<Value> Error for NodeError<Value> {}

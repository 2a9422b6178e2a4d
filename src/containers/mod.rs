//! Capacity bounded containers: a FIFO queue, a LIFO stack that only uses queue operations, and a
//! deque that grows at both ends.

pub mod deque;
pub mod queue;
pub mod stack;

use std::fmt;

use thiserror::Error;

pub use deque::BoundedDeque;
pub use queue::BoundedQueue;
pub use stack::BoundedStack;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("container is full, capacity is {capacity}")]
    Overflow { capacity: usize },

    #[error("container is empty")]
    Empty,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type ContainerResult<T> = Result<T, ContainerError>;

/// Writes `items` as `[a, b, c]`.
fn write_items<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

use std::collections::vec_deque::{self, VecDeque};
use std::fmt;

use super::{write_items, ContainerError, ContainerResult};

/// FIFO queue holding at most `capacity` items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the bound. Items past a lowered bound stay queued, the queue reports full until
    /// enough of them are popped.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Appends `item` at the back.
    pub fn push(&mut self, item: T) -> ContainerResult<()> {
        if self.is_full() {
            return Err(ContainerError::Overflow {
                capacity: self.capacity,
            });
        }

        self.items.push_back(item);
        Ok(())
    }

    /// Removes the front item.
    pub fn pop(&mut self) -> ContainerResult<T> {
        self.items.pop_front().ok_or(ContainerError::Empty)
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.iter())
    }
}

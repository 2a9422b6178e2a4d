use std::collections::vec_deque::{self, VecDeque};
use std::fmt;

use super::{write_items, ContainerError, ContainerResult};

/// List with a fixed capacity that can grow and shrink at either end and is indexable from the
/// front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
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

    fn check_room(&self) -> ContainerResult<()> {
        if self.is_full() {
            Err(ContainerError::Overflow {
                capacity: self.capacity,
            })
        } else {
            Ok(())
        }
    }

    pub fn push_front(&mut self, item: T) -> ContainerResult<()> {
        self.check_room()?;
        self.items.push_front(item);
        Ok(())
    }

    pub fn push_back(&mut self, item: T) -> ContainerResult<()> {
        self.check_room()?;
        self.items.push_back(item);
        Ok(())
    }

    pub fn pop_front(&mut self) -> ContainerResult<T> {
        self.items.pop_front().ok_or(ContainerError::Empty)
    }

    pub fn pop_back(&mut self) -> ContainerResult<T> {
        self.items.pop_back().ok_or(ContainerError::Empty)
    }

    /// The item `index` positions from the front.
    pub fn get(&self, index: usize) -> ContainerResult<&T> {
        self.items.get(index).ok_or(ContainerError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for BoundedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ends() {
        let mut deque = BoundedDeque::new(10);
        for i in 0..3 {
            deque.push_front(i + 10).unwrap();
        }
        for i in 0..3 {
            deque.push_back(i * 2).unwrap();
        }

        assert_eq!(deque.to_string(), "[12, 11, 10, 0, 2, 4]");
        assert_eq!(deque.get(0), Ok(&12));
        assert_eq!(deque.get(5), Ok(&4));

        assert_eq!(deque.pop_front(), Ok(12));
        assert_eq!(deque.pop_back(), Ok(4));
        assert_eq!(deque.front(), Some(&11));
        assert_eq!(deque.back(), Some(&2));
        assert_eq!(deque.len(), 4);
    }

    #[test]
    fn index_out_of_range() {
        let mut deque = BoundedDeque::new(4);
        deque.push_back('a').unwrap();

        assert_eq!(
            deque.get(1),
            Err(ContainerError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            BoundedDeque::<char>::new(4).get(0),
            Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn overflow_at_either_end() {
        let mut deque = BoundedDeque::new(3);
        deque.push_front(1).unwrap();
        deque.push_back(2).unwrap();
        deque.push_front(0).unwrap();

        let overflow = Err(ContainerError::Overflow { capacity: 3 });
        assert_eq!(deque.push_front(9), overflow);
        assert_eq!(deque.push_back(9), overflow);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);

        // Room at one end frees room at the other.
        deque.pop_back().unwrap();
        assert_eq!(deque.push_front(-1), Ok(()));
        assert_eq!(deque.to_string(), "[-1, 0, 1]");
    }

    #[test]
    fn drain_then_underflow() {
        let mut deque = BoundedDeque::new(5);
        for i in 0..5 {
            deque.push_back(i).unwrap();
        }

        let mut removed = 0;
        while deque.pop_back().is_ok() {
            removed += 1;
        }

        assert_eq!(removed, 5);
        assert_eq!(deque.pop_front(), Err(ContainerError::Empty));
        assert_eq!(deque.pop_back(), Err(ContainerError::Empty));
        assert_eq!(deque.to_string(), "[]");
    }
}

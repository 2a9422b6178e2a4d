use std::fmt;

use super::{write_items, BoundedQueue, ContainerResult};

/// LIFO stack that only uses [`BoundedQueue`] operations.
///
/// Every push cycles the older items behind the new one, so the queue front is always the top of
/// the stack. Push is O(n), pop is O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedStack<T> {
    queue: BoundedQueue<T>,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: BoundedQueue::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.queue.set_capacity(capacity);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn push(&mut self, item: T) -> ContainerResult<()> {
        self.queue.push(item)?;

        for _ in 1..self.queue.len() {
            let older = self.queue.pop()?;
            self.queue.push(older)?;
        }

        Ok(())
    }

    pub fn pop(&mut self) -> ContainerResult<T> {
        self.queue.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.queue.iter()
    }
}

impl<T: fmt::Display> fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    use crate::containers::ContainerError;
    use crate::patterns;

    #[test]
    fn last_in_first_out() {
        let mut stack = BoundedStack::new(4);
        for i in 1..=4 {
            stack.push(i).unwrap();
        }

        assert_eq!(stack.peek(), Some(&4));
        assert_eq!(stack.to_string(), "[4, 3, 2, 1]");

        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop().ok()).collect();
        assert_eq!(popped, [4, 3, 2, 1]);
        assert_eq!(stack.pop(), Err(ContainerError::Empty));
    }

    #[test]
    fn overflow_keeps_order() {
        let mut stack = BoundedStack::new(2);
        stack.push("bottom").unwrap();
        stack.push("top").unwrap();

        assert_eq!(
            stack.push("extra"),
            Err(ContainerError::Overflow { capacity: 2 })
        );
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), ["top", "bottom"]);
        assert!(stack.is_full());
    }

    #[test]
    fn zero_capacity() {
        let mut stack: BoundedStack<String> = BoundedStack::new(0);
        assert!(stack.push("x".into()).is_err());
        assert!(stack.is_empty());
        assert_eq!(stack.to_string(), "[]");
    }

    #[test]
    fn matches_vec_model() {
        let mut rng = patterns::seeded_rng();
        let capacity = 8;

        let mut stack = BoundedStack::new(capacity);
        let mut model = Vec::new();

        for _ in 0..2_000 {
            if rng.gen_bool(0.55) {
                let item: u16 = rng.gen();
                let pushed = stack.push(item);
                if model.len() < capacity {
                    assert_eq!(pushed, Ok(()));
                    model.push(item);
                } else {
                    assert_eq!(pushed, Err(ContainerError::Overflow { capacity }));
                }
            } else {
                assert_eq!(stack.pop().ok(), model.pop());
            }

            assert_eq!(stack.len(), model.len());
            assert_eq!(stack.peek(), model.last());
        }
    }
}

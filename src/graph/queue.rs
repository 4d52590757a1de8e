//! Fixed-capacity FIFO queue used by BFS.

use std::collections::VecDeque;

use crate::types::{AlgoError, AlgoResult};

/// FIFO queue that never grows past the capacity it was created with.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append to the back. Fails with `QueueFull` at capacity.
    pub fn push(&mut self, item: T) -> AlgoResult<()> {
        if self.items.len() >= self.capacity {
            return Err(AlgoError::QueueFull(self.capacity));
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Remove from the front. Fails with `EmptyQueue` when nothing is queued.
    pub fn pop(&mut self) -> AlgoResult<T> {
        self.items.pop_front().ok_or(AlgoError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_then_empty() {
        let mut q = BoundedQueue::new(3);
        for v in [1, 2, 3] {
            q.push(v).unwrap();
        }
        assert_eq!(q.pop().unwrap(), 1);
        assert_eq!(q.pop().unwrap(), 2);
        assert_eq!(q.pop().unwrap(), 3);
        assert!(matches!(q.pop(), Err(AlgoError::EmptyQueue)));
    }

    #[test]
    fn test_push_past_capacity() {
        let mut q = BoundedQueue::new(1);
        q.push('a').unwrap();
        assert!(matches!(q.push('b'), Err(AlgoError::QueueFull(1))));
        assert_eq!(q.len(), 1);
        // Popping frees a slot again.
        q.pop().unwrap();
        q.push('c').unwrap();
        assert_eq!(q.capacity(), 1);
    }
}

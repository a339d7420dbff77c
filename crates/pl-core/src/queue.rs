//! `FifoQueue`: strict first-in first-out queue.
//!
//! Holds cars waiting to enter or leave the lot.  Only the head is ever
//! inspected, which is what gives the engine its head-of-line blocking
//! discipline.

use std::collections::VecDeque;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    inner: VecDeque<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.inner.push_back(item);
    }

    /// Remove and return the head.
    ///
    /// # Errors
    /// [`CoreError::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> CoreResult<T> {
        self.inner.pop_front().ok_or(CoreError::EmptyQueue)
    }

    /// Borrow the head without removing it.
    ///
    /// # Errors
    /// [`CoreError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> CoreResult<&T> {
        self.inner.front().ok_or(CoreError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

//! Exploration frontiers.
//!
//! A frontier holds discovered-but-not-yet-expanded search states in the
//! order they will be expanded. [`QueueFrontier`] is first-in first-out and is
//! what makes the search breadth-first; shortest-hop results depend on it.
//! [`StackFrontier`] is last-in first-out and turns the same loop into a
//! depth-first walk, which still finds *a* path but not necessarily the
//! shortest one.

use std::collections::VecDeque;

use crate::error::FrontierError;

/// Ordered container of pending search nodes.
///
/// Frontiers do not deduplicate; callers keep their own explored set.
pub trait Frontier<T> {
    /// Adds an item to the frontier.
    fn add(&mut self, item: T);

    /// Removes the next item to expand.
    ///
    /// # Errors
    /// Returns [`FrontierError::Empty`] when nothing is pending.
    fn remove(&mut self) -> Result<T, FrontierError>;

    /// Returns true if nothing is pending.
    fn is_empty(&self) -> bool;

    /// Number of pending items.
    fn len(&self) -> usize;
}

/// First-in first-out frontier (breadth-first order).
///
/// # Examples
///
/// ```
/// use costar::{Frontier, QueueFrontier};
///
/// let mut q = QueueFrontier::new();
/// q.add(1);
/// q.add(2);
/// assert_eq!(q.remove(), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Returns true if an equal item is pending.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.items.pop_front().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Last-in first-out frontier (depth-first order).
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns true if an equal item is pending.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.items.pop().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

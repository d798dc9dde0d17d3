use std::collections::VecDeque;

/// FIFO of pending work. The queue carries no lock of its own: it is only
/// ever touched while the pool's mutex is held.
pub struct TaskQueue<T> {
    items: VecDeque<T>,
}

impl<T> TaskQueue<T> {
    pub fn new() -> TaskQueue<T> {
        TaskQueue {
            items: VecDeque::new(),
        }
    }

    /// Append at the tail. O(1).
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head, `None` when empty. O(1).
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        TaskQueue::new()
    }
}

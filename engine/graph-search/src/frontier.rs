//! Frontier containers for the expansion loop.
//!
//! All three containers accept duplicate entries: there is no decrease-key.
//! A state reached by several in-progress expansions is simply pushed again,
//! and stale entries are skipped at pop time by the visited check in the
//! search loop.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Common interface the expansion loop drives.
///
/// `push` takes a priority; the unordered containers ignore it, which is
/// what lets one loop instantiate all four algorithms.
pub trait Frontier<T> {
    fn push(&mut self, item: T, priority: f64);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

/// LIFO frontier (depth-first order).
#[derive(Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Frontier<T> for Stack<T> {
    #[inline]
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// FIFO frontier (breadth-first order).
#[derive(Debug, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Frontier<T> for Queue<T> {
    #[inline]
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Min-priority frontier with decrease-key-free insertion.
///
/// Entries with equal priority pop in insertion order, enforced by a
/// monotone sequence counter. Priorities are finite floats; NaN is treated
/// as equal to everything, so callers must not push NaN priorities.
#[derive(Debug, Default)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both keys for min-pop and
        // FIFO among equal priorities.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Frontier<T> for PriorityQueue<T> {
    fn push(&mut self, item: T, priority: f64) {
        let entry = Entry {
            priority,
            seq: self.seq,
            item,
        };
        self.seq += 1;
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

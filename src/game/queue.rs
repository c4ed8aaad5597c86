//! FIFO work-list used by the connectivity search.
//!
//! Nodes live in a slot arena and form a circular doubly linked sequence
//! through a data-less sentinel at slot 0: the sentinel's `next` is the head,
//! its `prev` is the tail. Freed slots are recycled.

use crate::error::EmptyQueueError;

const SENTINEL: usize = 0;

#[derive(Debug, Clone)]
struct Node<T> {
    data: Option<T>,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone)]
pub struct Queue<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            nodes: vec![Node {
                data: None,
                prev: SENTINEL,
                next: SENTINEL,
            }],
            free: Vec::new(),
        }
    }

    /// Append `item` just before the sentinel. O(1).
    pub fn enqueue(&mut self, item: T) {
        let tail = self.nodes[SENTINEL].prev;
        let node = Node {
            data: Some(item),
            prev: tail,
            next: SENTINEL,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[tail].next = idx;
        self.nodes[SENTINEL].prev = idx;
    }

    /// Remove and return the node after the sentinel. O(1).
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        let head = self.nodes[SENTINEL].next;
        if head == SENTINEL {
            return Err(EmptyQueueError);
        }
        let next = self.nodes[head].next;
        self.nodes[SENTINEL].next = next;
        self.nodes[next].prev = SENTINEL;
        self.free.push(head);
        self.nodes[head].data.take().ok_or(EmptyQueueError)
    }

    /// Count data nodes by walking the ring from the sentinel. O(n).
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.nodes[SENTINEL].next;
        while cursor != SENTINEL {
            count += 1;
            cursor = self.nodes[cursor].next;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[SENTINEL].next == SENTINEL
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

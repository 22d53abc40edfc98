use std::collections::{HashMap, VecDeque};

/// Fully-associative translation lookaside buffer with FIFO eviction.
///
/// The TLB is a cache over the page table, never a source of truth: the
/// owner is responsible for removing entries whose page is evicted from
/// physical memory. Hit/miss accounting also belongs to the owner so the
/// cache stays reusable.
#[derive(Debug)]
pub struct Tlb {
    map: HashMap<u32, u32>,
    /// Pages in insertion order; front is the oldest entry.
    queue: VecDeque<u32>,
    capacity: usize,
}

impl Tlb {
    pub fn new(capacity: usize) -> Self {
        Tlb {
            map: HashMap::with_capacity(capacity),
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn lookup(&self, page: u32) -> Option<u32> {
        self.map.get(&page).copied()
    }

    /// Insert a page -> frame mapping, evicting the oldest entry at capacity.
    ///
    /// Inserting a page that is already cached is a no-op: FIFO order is
    /// fixed at first insertion and a repeated insert must not duplicate
    /// the queue entry.
    pub fn insert(&mut self, page: u32, frame: u32) {
        if self.map.contains_key(&page) {
            return;
        }
        if self.map.len() >= self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.map.remove(&oldest);
            }
        }
        self.map.insert(page, frame);
        self.queue.push_back(page);
    }

    /// Drop a page's entry, keeping map and queue in step.
    pub fn remove(&mut self, page: u32) {
        if self.map.remove(&page).is_some() {
            self.queue.retain(|&p| p != page);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

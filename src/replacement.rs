use std::collections::VecDeque;
use std::str::FromStr;

use log::debug;

use crate::error::MmuError;
use crate::page_table::PageTable;

/// Page-replacement policy, fixed at session creation.
///
/// Unknown policy names are rejected here, once; nothing downstream
/// re-checks strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Lru,
    SecondChance,
}

impl FromStr for Policy {
    type Err = MmuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LRU" | "lru" => Ok(Policy::Lru),
            "SegundaChance" | "second-chance" | "secondchance" | "clock" => {
                Ok(Policy::SecondChance)
            }
            other => Err(MmuError::UnknownPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Lru => write!(f, "LRU"),
            Policy::SecondChance => write!(f, "SegundaChance"),
        }
    }
}

/// Outcome of a page-fault resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Frame now holding the faulting page.
    pub frame: u32,
    /// Page evicted to free that frame, if memory was full.
    pub evicted: Option<u32>,
}

/// Resident page with its LRU aging counter, in arrival order.
#[derive(Debug, Clone, Copy)]
struct LruSlot {
    page: u32,
    frame: u32,
    age: u64,
}

/// Resident frame in the second-chance circular queue.
#[derive(Debug, Clone, Copy)]
struct ClockSlot {
    frame: u32,
    page: u32,
    referenced: bool,
}

#[derive(Debug)]
enum PolicyState {
    /// Aging counters per resident page. `on_access` is O(resident),
    /// which is fine at the capacities this simulator models.
    Lru { slots: Vec<LruSlot> },
    /// FIFO of resident frames with one reference bit each; front is the
    /// next eviction candidate.
    SecondChance { queue: VecDeque<ClockSlot> },
}

/// Picks eviction victims and tracks the bookkeeping that drives the
/// decision: aging counters for LRU, a reference-bit queue for
/// second-chance. Also owns frame assignment: frames fill sequentially
/// from 0 until memory is full, then victims' frames are reused.
#[derive(Debug)]
pub struct ReplacementEngine {
    capacity: usize,
    state: PolicyState,
}

impl ReplacementEngine {
    pub fn new(policy: Policy, capacity: usize) -> Self {
        let state = match policy {
            Policy::Lru => PolicyState::Lru {
                slots: Vec::with_capacity(capacity),
            },
            Policy::SecondChance => PolicyState::SecondChance {
                queue: VecDeque::with_capacity(capacity),
            },
        };
        ReplacementEngine { capacity, state }
    }

    pub fn policy(&self) -> Policy {
        match self.state {
            PolicyState::Lru { .. } => Policy::Lru,
            PolicyState::SecondChance { .. } => Policy::SecondChance,
        }
    }

    fn resident(&self) -> usize {
        match &self.state {
            PolicyState::Lru { slots } => slots.len(),
            PolicyState::SecondChance { queue } => queue.len(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.resident() >= self.capacity
    }

    /// Resolve a fault for a non-resident page.
    ///
    /// While memory has free frames they are handed out in ascending
    /// order; afterwards the policy selects a victim, whose page is
    /// removed from the page table and whose frame is reused. The
    /// faulting page is registered in the table and in the policy
    /// bookkeeping before returning.
    pub fn on_fault(&mut self, page: u32, table: &mut PageTable) -> Placement {
        let (frame, evicted) = if self.is_full() {
            let (frame, victim) = self.select_victim();
            debug!("evicting page {victim:#x} from frame {frame}");
            table.remove(victim);
            (frame, Some(victim))
        } else {
            (self.resident() as u32, None)
        };

        table.insert(page, frame);
        match &mut self.state {
            PolicyState::Lru { slots } => slots.push(LruSlot {
                page,
                frame,
                age: 0,
            }),
            PolicyState::SecondChance { queue } => queue.push_back(ClockSlot {
                frame,
                page,
                referenced: true,
            }),
        }

        Placement { frame, evicted }
    }

    /// Remove the policy's victim from its bookkeeping and return
    /// (freed frame, evicted page). Callable only when full.
    fn select_victim(&mut self) -> (u32, u32) {
        match &mut self.state {
            PolicyState::Lru { slots } => {
                // Strictly maximum age wins; on ties the oldest-resident
                // page (earliest slot) is kept as the victim.
                let mut victim = 0;
                for (idx, slot) in slots.iter().enumerate() {
                    if slot.age > slots[victim].age {
                        victim = idx;
                    }
                }
                let slot = slots.remove(victim);
                (slot.frame, slot.page)
            }
            PolicyState::SecondChance { queue } => {
                // Rotate referenced frames to the tail, clearing their
                // bit; terminates within one sweep because cleared
                // frames are not re-referenced mid-scan.
                loop {
                    match queue.pop_front() {
                        Some(slot) if slot.referenced => {
                            queue.push_back(ClockSlot {
                                referenced: false,
                                ..slot
                            });
                        }
                        Some(slot) => return (slot.frame, slot.page),
                        None => unreachable!("select_victim called on empty queue"),
                    }
                }
            }
        }
    }

    /// Record an access to a resident page.
    ///
    /// LRU resets the page's age and ages every other resident page;
    /// second-chance sets the reference bit of the page's frame without
    /// reordering the queue.
    pub fn on_access(&mut self, page: u32) {
        match &mut self.state {
            PolicyState::Lru { slots } => {
                for slot in slots.iter_mut() {
                    if slot.page == page {
                        slot.age = 0;
                    } else {
                        slot.age += 1;
                    }
                }
            }
            PolicyState::SecondChance { queue } => {
                for slot in queue.iter_mut() {
                    if slot.page == page {
                        slot.referenced = true;
                        break;
                    }
                }
            }
        }
    }
}

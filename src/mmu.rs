use log::debug;

use crate::constants::*;
use crate::error::MmuError;
use crate::page_table::PageTable;
use crate::replacement::{Policy, ReplacementEngine};
use crate::stats::TranslationStats;
use crate::tlb::Tlb;
use crate::translation::{LogicalAddress, physical_address};

/// Session configuration, validated once at `Mmu` construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmuConfig {
    pub policy: Policy,
    pub tlb_capacity: usize,
    pub frame_capacity: usize,
    pub offset_bits: u32,
    pub address_bits: u32,
}

impl MmuConfig {
    /// Reference configuration: 16-entry TLB, 64 frames, 4 KiB pages,
    /// 32-bit addresses.
    pub fn new(policy: Policy) -> Self {
        MmuConfig {
            policy,
            tlb_capacity: TLB_CAPACITY,
            frame_capacity: FRAME_CAPACITY,
            offset_bits: OFFSET_BITS,
            address_bits: ADDRESS_BITS,
        }
    }

    fn validate(&self) -> Result<(), MmuError> {
        if self.tlb_capacity == 0 {
            return Err(MmuError::Config("TLB capacity must be positive".into()));
        }
        if self.frame_capacity == 0 {
            return Err(MmuError::Config("frame capacity must be positive".into()));
        }
        if self.address_bits == 0 || self.address_bits > u32::BITS {
            return Err(MmuError::Config(format!(
                "address width must be in 1..={}, got {}",
                u32::BITS,
                self.address_bits
            )));
        }
        if self.offset_bits == 0 || self.offset_bits >= self.address_bits {
            return Err(MmuError::Config(format!(
                "offset width {} leaves no page bits in a {}-bit address",
                self.offset_bits, self.address_bits
            )));
        }
        Ok(())
    }
}

/// The translator: resolves logical addresses through TLB, page table,
/// and replacement engine, in that order, collecting statistics as it
/// goes. One instance per simulation session; the policy is fixed for
/// the session's lifetime.
#[derive(Debug)]
pub struct Mmu {
    config: MmuConfig,
    tlb: Tlb,
    table: PageTable,
    engine: ReplacementEngine,
    stats: TranslationStats,
}

impl Mmu {
    pub fn new(config: MmuConfig) -> Result<Self, MmuError> {
        config.validate()?;
        Ok(Mmu {
            config,
            tlb: Tlb::new(config.tlb_capacity),
            table: PageTable::new(),
            engine: ReplacementEngine::new(config.policy, config.frame_capacity),
            stats: TranslationStats::new(),
        })
    }

    /// Build a session with the reference configuration.
    pub fn with_policy(policy: Policy) -> Result<Self, MmuError> {
        Self::new(MmuConfig::new(policy))
    }

    /// Translate a logical address to a physical address.
    ///
    /// Addresses with bits above the configured width are rejected (not
    /// masked) and leave every structure and counter untouched.
    pub fn translate(&mut self, addr: u32) -> Result<u32, MmuError> {
        if self.config.address_bits < u32::BITS && (addr >> self.config.address_bits) != 0 {
            return Err(MmuError::InvalidAddress {
                addr,
                bits: self.config.address_bits,
            });
        }

        let la = LogicalAddress::split(addr, self.config.offset_bits);

        let frame = match self.tlb.lookup(la.page) {
            Some(frame) => {
                self.stats.record_tlb_hit();
                frame
            }
            None => {
                self.stats.record_tlb_miss();
                let frame = match self.table.lookup(la.page) {
                    Some(frame) => frame,
                    None => {
                        self.stats.record_page_fault();
                        debug!("page fault on page {:#x}", la.page);
                        let placement = self.engine.on_fault(la.page, &mut self.table);
                        if let Some(evicted) = placement.evicted {
                            // Keep the TLB a strict subset of the page
                            // table: a stale mapping must not serve the
                            // evicted page from the reassigned frame.
                            self.tlb.remove(evicted);
                        }
                        placement.frame
                    }
                };
                self.tlb.insert(la.page, frame);
                frame
            }
        };

        self.engine.on_access(la.page);
        Ok(physical_address(frame, la.offset, self.config.offset_bits))
    }

    pub fn config(&self) -> &MmuConfig {
        &self.config
    }

    pub fn policy(&self) -> Policy {
        self.engine.policy()
    }

    /// Frame currently backing a page, if the page is resident.
    pub fn frame_of(&self, page: u32) -> Option<u32> {
        self.table.lookup(page)
    }

    pub fn resident_pages(&self) -> usize {
        self.table.len()
    }

    pub fn stats(&self) -> &TranslationStats {
        &self.stats
    }
}

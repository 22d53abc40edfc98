use crate::error::MmuError;

/// Hit/miss/fault counters for one simulation session.
///
/// Counters start at zero, only ever grow, and are recorded exclusively
/// by the translator; readers get copies and derived rates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranslationStats {
    tlb_hits: u64,
    tlb_misses: u64,
    page_faults: u64,
}

impl TranslationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_tlb_hit(&mut self) {
        self.tlb_hits += 1;
    }

    pub(crate) fn record_tlb_miss(&mut self) {
        self.tlb_misses += 1;
    }

    pub(crate) fn record_page_fault(&mut self) {
        self.page_faults += 1;
    }

    pub fn tlb_hits(&self) -> u64 {
        self.tlb_hits
    }

    pub fn tlb_misses(&self) -> u64 {
        self.tlb_misses
    }

    pub fn page_faults(&self) -> u64 {
        self.page_faults
    }

    /// Total translations performed; every translation does exactly one
    /// TLB lookup.
    pub fn accesses(&self) -> u64 {
        self.tlb_hits + self.tlb_misses
    }

    fn ratio(&self, numerator: u64) -> Result<f64, MmuError> {
        match self.accesses() {
            0 => Err(MmuError::EmptyStatistics),
            total => Ok(numerator as f64 / total as f64),
        }
    }

    pub fn tlb_hit_rate(&self) -> Result<f64, MmuError> {
        self.ratio(self.tlb_hits)
    }

    pub fn tlb_miss_rate(&self) -> Result<f64, MmuError> {
        self.ratio(self.tlb_misses)
    }

    pub fn page_fault_rate(&self) -> Result<f64, MmuError> {
        self.ratio(self.page_faults)
    }
}

impl std::fmt::Display for TranslationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hits={} misses={} faults={}",
            self.tlb_hits, self.tlb_misses, self.page_faults
        )
    }
}

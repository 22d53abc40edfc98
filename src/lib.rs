pub mod constants;
pub mod error;
pub mod io;
pub mod mmu;
pub mod page_table;
pub mod replacement;
pub mod stats;
pub mod tlb;
pub mod translation;

// Re-export commonly used items for convenience
pub use constants::*;
pub use error::{MmuError, TraceError};
pub use mmu::{Mmu, MmuConfig};
pub use replacement::Policy;
pub use stats::TranslationStats;
pub use translation::LogicalAddress;

use crate::constants::*;

/// Represents the decomposed components of a logical address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalAddress {
    pub raw: u32,
    pub page: u32,
    pub offset: u32,
}

impl LogicalAddress {
    /// Decompose a raw logical address into page number and offset
    pub fn split(raw: u32, offset_bits: u32) -> Self {
        let page = raw >> offset_bits;
        let offset = raw & ((1 << offset_bits) - 1);
        LogicalAddress { raw, page, offset }
    }

    /// Decompose with the default 20/12 bit layout
    pub fn from_raw(raw: u32) -> Self {
        Self::split(raw, OFFSET_BITS)
    }
}

impl std::fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LA({:#x}) = (page={:#x}, offset={:#x})",
            self.raw, self.page, self.offset
        )
    }
}

/// Compose a physical address from a frame number and an offset
#[inline]
pub fn physical_address(frame: u32, offset: u32, offset_bits: u32) -> u32 {
    (frame << offset_bits) | offset
}

pub const OFFSET_BITS: u32 = 12;
pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;
pub const OFFSET_MASK: u32 = (PAGE_SIZE - 1) as u32;

pub const ADDRESS_BITS: u32 = 32;
pub const PAGE_BITS: u32 = ADDRESS_BITS - OFFSET_BITS;

pub const TLB_CAPACITY: usize = 16;
pub const FRAME_CAPACITY: usize = 64;

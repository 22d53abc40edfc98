use std::collections::HashMap;

/// Page -> frame mapping for every page currently resident in physical
/// memory. The replacement engine keeps `len()` bounded by the frame
/// capacity and guarantees frame numbers stay pairwise distinct.
#[derive(Debug, Default)]
pub struct PageTable {
    frames: HashMap<u32, u32>,
}

impl PageTable {
    pub fn new() -> Self {
        PageTable {
            frames: HashMap::new(),
        }
    }

    pub fn lookup(&self, page: u32) -> Option<u32> {
        self.frames.get(&page).copied()
    }

    /// Insert a mapping for a page that is not resident.
    ///
    /// The caller must evict first; a resident page is never remapped.
    pub fn insert(&mut self, page: u32, frame: u32) {
        let previous = self.frames.insert(page, frame);
        debug_assert!(previous.is_none(), "page {page:#x} was already resident");
    }

    /// Remove a page's mapping, returning the frame it occupied.
    pub fn remove(&mut self, page: u32) -> Option<u32> {
        self.frames.remove(&page)
    }

    pub fn contains(&self, page: u32) -> bool {
        self.frames.contains_key(&page)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_insert() {
        let mut pt = PageTable::new();
        assert_eq!(pt.lookup(5), None);
        pt.insert(5, 2);
        assert_eq!(pt.lookup(5), Some(2));
        assert!(pt.contains(5));
        assert_eq!(pt.len(), 1);
    }

    #[test]
    fn test_remove_returns_frame() {
        let mut pt = PageTable::new();
        pt.insert(5, 2);
        assert_eq!(pt.remove(5), Some(2));
        assert_eq!(pt.remove(5), None);
        assert!(pt.is_empty());
    }

    #[test]
    fn test_distinct_frames_stay_distinct() {
        let mut pt = PageTable::new();
        for page in 0..8 {
            pt.insert(page, page);
        }
        let mut seen: Vec<u32> = (0..8).filter_map(|p| pt.lookup(p)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }
}

//! Read-only views of memory regions
//!
//! A region is described by its bounds, typically linker symbols such as
//! the start and end of `.bss`. The bounds are plain addresses; nothing in
//! this module ever writes through them.

use crate::reg;

/// Half-open address range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryRegion {
    start: usize,
    end: usize,
}

impl MemoryRegion {
    /// Create a region from its bounds
    ///
    /// A reversed pair is clamped to an empty region at `start`.
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// First address in the region
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last address in the region
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Size in bytes
    pub const fn size(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `addr` falls inside the region
    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.end
    }

    /// Iterate over the first `limit` bytes of the region
    ///
    /// Each byte is fetched with a volatile 8-bit read at the time the
    /// iterator yields it.
    ///
    /// # Safety
    ///
    /// The whole region must be readable memory for as long as the
    /// iterator is used.
    pub unsafe fn bytes(&self, limit: usize) -> RegionBytes {
        let len = if limit < self.size() { limit } else { self.size() };
        RegionBytes {
            next: self.start,
            end: self.start + len,
        }
    }
}

/// Iterator returned by [`MemoryRegion::bytes`]
#[derive(Debug)]
pub struct RegionBytes {
    next: usize,
    end: usize,
}

impl Iterator for RegionBytes {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next >= self.end {
            return None;
        }
        // SAFETY: the creator of this iterator vouched for the region.
        let byte = unsafe { reg::read8(self.next) };
        self.next += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegionBytes {}

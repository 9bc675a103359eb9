use std::fmt;

/// Page identifier type - uniquely identifies a page on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageId({})", self.0)
    }
}

/// Frame identifier type - identifies a buffer frame in the buffer pool.
/// Deliberately a distinct type from PageId: the two index spaces use
/// different moduli across the join phases and must never be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u32);

impl FrameId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}

/// Half-open range of contiguous disk page ids holding one relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIdRange {
    pub start: PageId,
    pub end: PageId,
}

impl PageIdRange {
    pub fn new(start: PageId, end: PageId) -> Self {
        assert!(start.as_u32() <= end.as_u32(), "range must be ascending");
        Self { start, end }
    }

    /// An empty range positioned at the next unallocated id.
    pub fn empty_at(at: PageId) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> u32 {
        self.end.as_u32() - self.start.as_u32()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterates the page ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> {
        (self.start.as_u32()..self.end.as_u32()).map(PageId::new)
    }
}

impl fmt::Display for PageIdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.as_u32(), self.end.as_u32())
    }
}

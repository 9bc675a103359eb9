use crate::common::{FrameId, JoinError, PageId, Result, PAGE_SIZE};
use crate::storage::disk::DiskManager;
use crate::storage::page::RecordPage;

/// BufferPool is the fixed memory budget of the join: `F` frames, each
/// holding one page's worth of records. There is no replacement policy and
/// no pinning; the join phases own the pool exclusively for the duration of
/// a call and address frames directly by index.
pub struct BufferPool {
    frames: Vec<RecordPage>,
}

impl BufferPool {
    /// Creates a pool with `frames` empty frames.
    pub fn new(frames: usize) -> Self {
        Self {
            frames: (0..frames).map(|_| RecordPage::new()).collect(),
        }
    }

    /// Number of frames in the pool.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame at `frame_id`.
    pub fn frame(&self, frame_id: FrameId) -> Result<&RecordPage> {
        self.frames
            .get(frame_id.as_usize())
            .ok_or(JoinError::InvalidFrameId(frame_id))
    }

    /// Returns the frame at `frame_id` mutably.
    pub fn frame_mut(&mut self, frame_id: FrameId) -> Result<&mut RecordPage> {
        self.frames
            .get_mut(frame_id.as_usize())
            .ok_or(JoinError::InvalidFrameId(frame_id))
    }

    /// Replaces the frame's content with the content of disk page `page_id`.
    pub fn load_from_disk(
        &mut self,
        disk: &DiskManager,
        page_id: PageId,
        frame_id: FrameId,
    ) -> Result<()> {
        let mut data = [0u8; PAGE_SIZE];
        disk.read_page(page_id, &mut data)?;

        let frame = self.frame_mut(frame_id)?;
        *frame = RecordPage::from_bytes(&data);
        Ok(())
    }

    /// Allocates a new disk page, writes the frame's content to it and
    /// returns the new page id. The frame is left untouched; callers that
    /// need an empty frame reset it explicitly.
    pub fn flush_to_disk(&mut self, disk: &DiskManager, frame_id: FrameId) -> Result<PageId> {
        let frame = self.frame(frame_id)?;
        let data = frame.to_bytes();

        let page_id = disk.allocate_page()?;
        disk.write_page(page_id, &data)?;
        Ok(page_id)
    }

    /// Clears every frame to the empty state. Idempotent.
    pub fn reset_all(&mut self) {
        for frame in &mut self.frames {
            frame.reset();
        }
    }
}

pub mod config;
pub mod error;
pub mod types;

pub use config::{PAGE_SIZE, RECORDS_PER_PAGE, RECORD_DATA_SIZE, RECORD_SIZE};
pub use error::{JoinError, Result};
pub use types::{FrameId, PageId, PageIdRange};

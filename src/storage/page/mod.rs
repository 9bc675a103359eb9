mod record_page;

pub use record_page::RecordPage;

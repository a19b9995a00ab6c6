//! Service layer for MindMyMoney
//!
//! The service layer applies validated records to storage and enforces the
//! list-level rules (index resolution, no-op updates).

pub mod records;

pub use records::RecordService;

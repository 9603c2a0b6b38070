pub mod request_id;

pub use request_id::{request_span, TimestampRequestId, REQUEST_ID_HEADER};

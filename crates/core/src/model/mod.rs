pub mod interval;
pub mod timeline;

pub use interval::{IDLE_IDENTIFIER, IdentifierKind, IntervalRecord, identifier_label};
pub use timeline::{RecordError, RejectedRecord, Timeline};

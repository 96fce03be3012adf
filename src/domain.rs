mod order_id;
mod order_record;
mod status_message;

pub use order_id::OrderId;
pub use order_record::OrderRecord;
pub use status_message::StatusMessage;

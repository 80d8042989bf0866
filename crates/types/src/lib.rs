mod additional_data;
mod create_order;
pub mod lenient;
mod order;
mod swap;

pub use additional_data::AdditionalData;
pub use create_order::CreateOrder;
pub use order::{MatchedOrder, OrderRecord};
pub use swap::Swap;

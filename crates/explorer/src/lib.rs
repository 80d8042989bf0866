mod client;
mod config;
mod error;
mod explorer;
pub mod projection;
pub mod query;
mod session;

pub use client::OrderClient;
pub use config::{ExplorerConfig, DEFAULT_API_URL};
pub use error::{ConfigError, FetchError, InvalidOrderId, UnknownPanel};
pub use explorer::Explorer;
pub use session::{
    Completion, Panel, Panels, Phase, ResponsePolicy, SearchTicket, Session, ViewState,
};

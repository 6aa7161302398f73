//! Walletgrid engine: explorer IO, thumbnail preloading, and scheduling.
mod debounce;
mod engine;
mod fetch;
mod preload;
mod types;

pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use engine::{EngineConfig, EngineHandle};
pub use fetch::{ExplorerApi, ExplorerError, ExplorerSettings, HttpExplorerApi};
pub use preload::{preload_all, HttpImagePreloader, ImagePreloader, PRELOAD_FLOOR};
pub use types::{EngineEvent, ImageUrlRecord, LinksRecord, ListingRecord, PageQuery, WalletPage};

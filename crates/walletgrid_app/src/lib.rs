//! Walletgrid application layer: wires the pure core to the IO engine.
mod convert;
mod runner;
mod toast;

pub use convert::{to_fetch_failure, to_fetched_page, to_wire_query};
pub use runner::EffectRunner;
pub use toast::{LogToastSink, ToastSink};

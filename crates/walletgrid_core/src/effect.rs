use crate::config::Device;

/// Parameters of one paginated explorer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub entries: usize,
    pub device: Device,
    pub search: String,
    pub version: u32,
    /// Comma-joined chain filter; empty when unrestricted.
    pub chains: String,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the next explorer page. `generation` tags the in-flight
    /// request so a stale completion can be told apart from the current one.
    FetchPage { generation: u64, query: PageQuery },
    /// Surface a transient notification through the toast sink.
    Toast { message: String, severity: Severity },
}

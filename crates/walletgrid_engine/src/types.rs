use serde::Deserialize;

use crate::fetch::ExplorerError;

/// Parameters of one paginated explorer request, wire level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub entries: usize,
    /// `"mobile"` or `"desktop"`.
    pub device: String,
    pub search: String,
    pub version: u32,
    /// Comma-joined chain filter; empty when unrestricted.
    pub chains: String,
}

/// Thumbnail variants served by the explorer image CDN.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageUrlRecord {
    #[serde(default)]
    pub sm: String,
    #[serde(default)]
    pub md: String,
    #[serde(default)]
    pub lg: String,
}

/// Launch link pair as served by the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LinksRecord {
    #[serde(default)]
    pub native: String,
    #[serde(default)]
    pub universal: String,
}

/// One wallet listing as served by the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: ImageUrlRecord,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub mobile: LinksRecord,
    #[serde(default)]
    pub desktop: LinksRecord,
}

/// Page payload returned by the explorer service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalletPage {
    pub listings: Vec<ListingRecord>,
    pub total: usize,
    #[serde(default)]
    pub page: usize,
}

/// Event emitted by the engine back to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageFetched {
        generation: u64,
        result: Result<WalletPage, ExplorerError>,
    },
}

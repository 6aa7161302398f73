use crate::wallet::Listing;

/// One page of explorer results, already converted from the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub listings: Vec<Listing>,
    pub total: usize,
    /// Page number the explorer served; becomes `PageState::page`.
    pub page: usize,
}

/// Recoverable explorer fetch failure, surfaced to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Search input settled after debouncing.
    SearchChanged(String),
    /// The scroll sentinel at the bottom of the grid became visible.
    EndOfListReached,
    /// An explorer page fetch finished on the engine side.
    PageFetched {
        generation: u64,
        result: Result<FetchedPage, FetchFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

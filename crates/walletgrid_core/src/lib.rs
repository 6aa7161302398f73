//! Walletgrid core: pure wallet aggregation state machine and view assembly.
mod config;
mod dedupe;
mod effect;
mod filter;
mod identity;
mod msg;
mod state;
mod update;
mod view_model;
mod wallet;

pub use config::{ClientSession, Device, DirectoryConfig, Environment, Policy};
pub use dedupe::{deduplicate_by_id, deduplicate_by_label};
pub use effect::{Effect, PageQuery, Severity};
pub use filter::{
    allowed_explorer_listings, connector_wallets, without_connector_duplicates, without_injected,
};
pub use identity::{
    is_same_wallet, name_contains, name_matches, normalize_name, WalletIdentity, COINBASE_ID,
    INJECTED_ID, INJECTED_NAME, METAMASK_ID,
};
pub use msg::{FetchFailure, FetchedPage, Msg};
pub use state::{ExplorerState, Mode, PageState, PAGE_ENTRIES, SEARCH_MIN_LEN};
pub use update::update;
pub use view_model::{compose_cards, CardKind, WalletCard, WalletGridView};
pub use wallet::{
    Connector, DesktopWallet, ExtensionWallet, ImageUrl, LinkPair, Listing, MobileWallet,
    RecentWallet,
};

//! Assembly of the final wallet grid presented to the user.

use std::cmp;

use crate::config::Device;
use crate::dedupe;
use crate::filter;
use crate::identity::{self, WalletIdentity, COINBASE_ID};
use crate::state::ExplorerState;
use crate::wallet::{ExtensionWallet, Listing, RecentWallet};

/// Which source a rendered card came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Extension,
    Listing,
    Connector,
    Recent,
}

/// One rendered wallet entry, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletCard {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub kind: CardKind,
}

impl WalletIdentity for WalletCard {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl WalletCard {
    fn from_listing(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            image_url: Some(listing.image_url.lg.clone()),
            kind: CardKind::Listing,
        }
    }

    fn from_extension(extension: &ExtensionWallet) -> Self {
        Self {
            id: extension.id.clone(),
            name: extension.name.clone(),
            image_url: Some(extension.icon.clone()),
            kind: CardKind::Extension,
        }
    }
}

/// The assembled, deduplicated grid for the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletGridView {
    pub cards: Vec<WalletCard>,
    /// True only while loading with nothing to show yet.
    pub loading: bool,
    pub end_reached: bool,
    /// Drives the empty-state indicator: nothing loading, no listings, no
    /// extensions, no featured entry.
    pub empty: bool,
}

impl ExplorerState {
    /// Composes the view for the active mode: policy and source filters,
    /// then dedup, then the extension and listing tracks interleaved
    /// position by position (two parallel tracks, not concatenation).
    pub fn view(&self) -> WalletGridView {
        let listings = self.current_page().listings.clone();
        let listings = filter::allowed_explorer_listings(listings, &self.config.policy);
        let listings = filter::without_injected(listings, &self.environment);
        let listings = filter::without_connector_duplicates(listings, self.client.as_ref());
        let listings = dedupe::deduplicate_by_id(listings);

        let is_loading = self.loading && listings.is_empty();
        let searching = self.search_active();

        // Extensions only make sense with a client on a desktop browser.
        let show_extensions =
            self.client.is_some() && self.environment.device == Device::Desktop;
        let mut extensions = if show_extensions {
            self.extensions.clone()
        } else {
            Vec::new()
        };
        if searching {
            extensions
                .retain(|extension| identity::name_contains(&extension.name, &self.search_term));
        }
        let extensions = dedupe::deduplicate_by_id(extensions);

        let featured = self.featured_connector(is_loading, searching);
        let empty =
            !self.loading && listings.is_empty() && extensions.is_empty() && featured.is_none();

        let mut cards = Vec::new();
        if !is_loading {
            let track_len = cmp::max(extensions.len(), listings.len());
            for index in 0..track_len {
                if let Some(extension) = extensions.get(index) {
                    cards.push(WalletCard::from_extension(extension));
                }
                if let Some(listing) = listings.get(index) {
                    cards.push(WalletCard::from_listing(listing));
                }
            }
            cards.extend(featured);
        }

        WalletGridView {
            cards,
            loading: is_loading,
            end_reached: self.end_reached,
            empty,
        }
    }

    /// The highlighted Coinbase entry, shown when its connector is
    /// registered and the search term (if any) matches it. A missing
    /// connector silently omits the card.
    fn featured_connector(&self, is_loading: bool, searching: bool) -> Option<WalletCard> {
        if is_loading || (searching && !identity::name_contains(COINBASE_ID, &self.search_term)) {
            return None;
        }
        let connector = self.client.as_ref()?.connector_by_id(COINBASE_ID)?;
        Some(WalletCard {
            id: connector.id.clone(),
            name: connector.name.clone(),
            image_url: None,
            kind: CardKind::Connector,
        })
    }
}

/// Composition rule for mixed lists of pre-rendered cards: duplicates
/// collapse by label, then the most recently used wallet is promoted to the
/// second slot regardless of its original source order.
pub fn compose_cards(cards: Vec<WalletCard>, recent: Option<&RecentWallet>) -> Vec<WalletCard> {
    let mut cards = dedupe::deduplicate_by_label(cards);
    if let Some(recent) = recent {
        cards.retain(|card| !identity::name_matches(&card.name, &recent.name));
        let promoted = WalletCard {
            id: recent.id.clone(),
            name: recent.name.clone(),
            image_url: None,
            kind: CardKind::Recent,
        };
        let slot = cmp::min(1, cards.len());
        cards.insert(slot, promoted);
    }
    cards
}

//! Source filters applied ahead of deduplication and view assembly.
//!
//! Each filter is a pure function from a source list to a filtered list;
//! none of them alters surviving entries.

use crate::config::{ClientSession, Device, Environment, Policy};
use crate::identity::{self, WalletIdentity, INJECTED_ID, INJECTED_NAME, METAMASK_ID};
use crate::wallet::{Connector, Listing};

/// Applies the allow/deny policy to explorer listings. The allow list, when
/// non-empty, restricts first; the deny list removes afterwards.
pub fn allowed_explorer_listings(mut listings: Vec<Listing>, policy: &Policy) -> Vec<Listing> {
    if !policy.allow_list.is_empty() {
        listings.retain(|listing| policy.allow_list.iter().any(|id| *id == listing.id));
    }
    if !policy.deny_list.is_empty() {
        listings.retain(|listing| !policy.deny_list.iter().any(|id| *id == listing.id));
    }
    listings
}

/// Drops entries that duplicate a detected injected provider by display
/// name. Applies to explorer listings and mobile wallets, never to
/// extension lists.
pub fn without_injected<W: WalletIdentity>(mut wallets: Vec<W>, env: &Environment) -> Vec<W> {
    if env.injected_provider {
        wallets.retain(|wallet| !identity::name_matches(wallet.name(), INJECTED_NAME));
    }
    wallets
}

/// Connectors eligible for display. Standalone mode has none. On mobile
/// without an injected provider, injected-style connectors are suppressed
/// since no provider exists to back them.
pub fn connector_wallets(client: Option<&ClientSession>, env: &Environment) -> Vec<Connector> {
    let Some(client) = client else {
        return Vec::new();
    };
    let mut connectors = client.connectors().to_vec();
    if !env.injected_provider && env.device == Device::Mobile {
        connectors.retain(|connector| {
            connector.id != INJECTED_ID && connector.id != METAMASK_ID
        });
    }
    connectors
}

/// Drops explorer listings that duplicate an already-registered connector
/// by display name; the connector entry takes precedence over the
/// marketing listing.
pub fn without_connector_duplicates(
    mut listings: Vec<Listing>,
    client: Option<&ClientSession>,
) -> Vec<Listing> {
    let Some(client) = client else {
        return listings;
    };
    let connector_names: Vec<String> = client
        .connectors()
        .iter()
        .map(|connector| identity::normalize_name(&connector.name))
        .collect();
    listings.retain(|listing| !connector_names.contains(&identity::normalize_name(&listing.name)));
    listings
}

//! Duplicate removal: single pass, first occurrence wins, order preserved.

use std::collections::HashSet;

use crate::identity::WalletIdentity;
use crate::view_model::WalletCard;

/// Removes duplicate wallets by exact id. Duplicate input is expected, not
/// an error; the first occurrence survives with its position intact.
pub fn deduplicate_by_id<W: WalletIdentity>(wallets: Vec<W>) -> Vec<W> {
    let mut seen: HashSet<String> = HashSet::with_capacity(wallets.len());
    wallets
        .into_iter()
        .filter(|wallet| seen.insert(wallet.id().to_owned()))
        .collect()
}

/// Removes duplicate rendered cards keyed by their label. Used when only
/// the presentation unit is left and the raw entity is gone; each removal
/// is logged as a diagnostic.
pub fn deduplicate_by_label(cards: Vec<WalletCard>) -> Vec<WalletCard> {
    let mut seen: HashSet<String> = HashSet::with_capacity(cards.len());
    cards
        .into_iter()
        .filter(|card| {
            let first = seen.insert(card.name.clone());
            if !first {
                log::debug!("dropping duplicate wallet card {}", card.name);
            }
            first
        })
        .collect()
}

/// Connector id of the generic injected provider.
pub const INJECTED_ID: &str = "injected";
/// Connector id of the MetaMask extension.
pub const METAMASK_ID: &str = "metaMask";
/// Connector id of the Coinbase Wallet extension.
pub const COINBASE_ID: &str = "coinbaseWallet";
/// Display label presented for the generic injected provider.
pub const INJECTED_NAME: &str = "Injected";

/// Minimal identity shared by every wallet variant. Filters and the
/// deduplication engine are written against this, not the concrete types.
pub trait WalletIdentity {
    /// Stable opaque identifier, unique within a source.
    fn id(&self) -> &str;
    /// Display name; casing conventions differ between sources.
    fn name(&self) -> &str;
}

/// Canonicalizes a wallet name for case-insensitive comparison.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// True when two display names refer to the same wallet.
///
/// Name matching is for heuristic exclusion only; exact deduplication goes
/// through [`is_same_wallet`].
pub fn name_matches(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// Case-insensitive containment, used for search-term matching.
pub fn name_contains(haystack: &str, needle: &str) -> bool {
    normalize_name(haystack).contains(&normalize_name(needle))
}

/// Exact identity equality. Ids are opaque and case sensitive; never
/// substitute name matching here.
pub fn is_same_wallet<A: WalletIdentity + ?Sized, B: WalletIdentity + ?Sized>(
    a: &A,
    b: &B,
) -> bool {
    a.id() == b.id()
}

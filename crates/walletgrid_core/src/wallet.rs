use crate::identity::WalletIdentity;

/// Thumbnail variants served by the explorer image CDN.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageUrl {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// Native-scheme plus universal-URL launch links.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkPair {
    pub native: String,
    pub universal: String,
}

/// Wallet entry sourced from the remote explorer directory. Immutable once
/// fetched; owned by the controller's page caches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub image_url: ImageUrl,
    pub homepage: String,
    pub mobile: LinkPair,
    pub desktop: LinkPair,
}

/// Wallet reachable through a mobile deep link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MobileWallet {
    pub id: String,
    pub name: String,
    pub links: LinkPair,
}

/// Wallet reachable through a desktop app link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopWallet {
    pub id: String,
    pub name: String,
    pub links: LinkPair,
}

/// Browser-extension wallet with an injection point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionWallet {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub url: String,
    pub is_mobile: bool,
    pub is_desktop: bool,
}

/// Wallet integration registered with an active client session, distinct
/// from a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Connector {
    pub id: String,
    pub name: String,
}

/// Identity of the most recently used wallet, as reported by the
/// recent-wallet store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentWallet {
    pub id: String,
    pub name: String,
}

macro_rules! impl_wallet_identity {
    ($($ty:ty),+ $(,)?) => {
        $(impl WalletIdentity for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        })+
    };
}

impl_wallet_identity!(
    Listing,
    MobileWallet,
    DesktopWallet,
    ExtensionWallet,
    Connector,
    RecentWallet,
);

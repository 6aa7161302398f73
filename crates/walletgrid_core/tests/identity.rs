use walletgrid_core::{
    is_same_wallet, name_contains, name_matches, normalize_name, Connector, Listing,
};

#[test]
fn normalize_lowercases_and_trims() {
    assert_eq!(normalize_name("  MetaMask "), "metamask");
    assert_eq!(normalize_name("RAINBOW"), "rainbow");
}

#[test]
fn name_matching_is_case_insensitive() {
    assert!(name_matches("MetaMask", "METAMASK"));
    assert!(name_matches(" Injected", "injected "));
    assert!(!name_matches("MetaMask", "MetaMask Legacy"));
}

#[test]
fn name_contains_is_case_insensitive_substring() {
    assert!(name_contains("coinbaseWallet", "Coin"));
    assert!(name_contains("Trust Wallet", "trust"));
    assert!(!name_contains("Rainbow", "metamask"));
}

#[test]
fn id_matching_is_exact_and_case_sensitive() {
    let listing = Listing {
        id: "metamask".to_string(),
        name: "MetaMask".to_string(),
        ..Listing::default()
    };
    let connector = Connector {
        id: "metamask".to_string(),
        name: "METAMASK".to_string(),
    };
    let other = Connector {
        id: "MetaMask".to_string(),
        name: "MetaMask".to_string(),
    };

    assert!(is_same_wallet(&listing, &connector));
    assert!(!is_same_wallet(&listing, &other));
}

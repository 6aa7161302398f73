use walletgrid_app::{to_fetch_failure, to_fetched_page, to_wire_query};
use walletgrid_core::{Device, PageQuery, PAGE_ENTRIES};
use walletgrid_engine::{ExplorerError, ImageUrlRecord, LinksRecord, ListingRecord, WalletPage};

#[test]
fn wire_query_carries_the_device_tag_and_filters() {
    let query = PageQuery {
        page: 3,
        entries: PAGE_ENTRIES,
        device: Device::Mobile,
        search: "metamask".to_string(),
        version: 2,
        chains: "eip155:1".to_string(),
    };

    let wire = to_wire_query(&query);

    assert_eq!(wire.page, 3);
    assert_eq!(wire.entries, PAGE_ENTRIES);
    assert_eq!(wire.device, "mobile");
    assert_eq!(wire.search, "metamask");
    assert_eq!(wire.version, 2);
    assert_eq!(wire.chains, "eip155:1");
}

#[test]
fn fetched_pages_map_records_onto_core_listings() {
    let page = WalletPage {
        listings: vec![ListingRecord {
            id: "rainbow".to_string(),
            name: "Rainbow".to_string(),
            image_url: ImageUrlRecord {
                sm: "sm.png".to_string(),
                md: "md.png".to_string(),
                lg: "lg.png".to_string(),
            },
            homepage: "https://rainbow.me".to_string(),
            mobile: LinksRecord {
                native: "rainbow://".to_string(),
                universal: "https://rnbw.app".to_string(),
            },
            desktop: LinksRecord::default(),
        }],
        total: 120,
        page: 2,
    };

    let fetched = to_fetched_page(page);

    assert_eq!(fetched.total, 120);
    assert_eq!(fetched.page, 2);
    assert_eq!(fetched.listings.len(), 1);
    let listing = &fetched.listings[0];
    assert_eq!(listing.id, "rainbow");
    assert_eq!(listing.image_url.lg, "lg.png");
    assert_eq!(listing.mobile.native, "rainbow://");
    assert_eq!(listing.desktop.universal, "");
}

#[test]
fn failures_keep_their_display_message() {
    let failure = to_fetch_failure(&ExplorerError::HttpStatus(500));
    assert_eq!(failure.message, "explorer returned http status 500");
}

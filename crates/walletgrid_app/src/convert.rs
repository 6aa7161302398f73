//! Conversions between engine wire records and core wallet types.

use walletgrid_core::{FetchFailure, FetchedPage, ImageUrl, LinkPair, Listing, PageQuery};
use walletgrid_engine::{
    ExplorerError, ImageUrlRecord, LinksRecord, ListingRecord, PageQuery as WireQuery, WalletPage,
};

/// Maps a core fetch request onto the explorer wire query.
pub fn to_wire_query(query: &PageQuery) -> WireQuery {
    WireQuery {
        page: query.page,
        entries: query.entries,
        device: query.device.as_str().to_string(),
        search: query.search.clone(),
        version: query.version,
        chains: query.chains.clone(),
    }
}

/// Maps a fetched explorer page into the core's representation.
pub fn to_fetched_page(page: WalletPage) -> FetchedPage {
    FetchedPage {
        listings: page.listings.into_iter().map(to_listing).collect(),
        total: page.total,
        page: page.page,
    }
}

/// Maps an engine error into the advisory failure the core surfaces.
pub fn to_fetch_failure(err: &ExplorerError) -> FetchFailure {
    FetchFailure {
        message: err.to_string(),
    }
}

fn to_listing(record: ListingRecord) -> Listing {
    Listing {
        id: record.id,
        name: record.name,
        image_url: to_image_url(record.image_url),
        homepage: record.homepage,
        mobile: to_links(record.mobile),
        desktop: to_links(record.desktop),
    }
}

fn to_image_url(record: ImageUrlRecord) -> ImageUrl {
    ImageUrl {
        sm: record.sm,
        md: record.md,
        lg: record.lg,
    }
}

fn to_links(record: LinksRecord) -> LinkPair {
    LinkPair {
        native: record.native,
        universal: record.universal,
    }
}

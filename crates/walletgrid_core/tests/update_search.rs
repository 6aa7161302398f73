use std::sync::Once;

use walletgrid_core::{
    update, DirectoryConfig, Effect, Environment, ExplorerState, FetchedPage, Listing, Mode, Msg,
    PageQuery,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(grid_logging::initialize_for_tests);
}

fn new_state() -> ExplorerState {
    ExplorerState::new(
        DirectoryConfig::default(),
        Environment::default(),
        None,
        Vec::new(),
    )
}

fn listings(prefix: &str, count: usize) -> Vec<Listing> {
    (0..count)
        .map(|index| Listing {
            id: format!("{prefix}{index}"),
            name: format!("{prefix}{index}"),
            ..Listing::default()
        })
        .collect()
}

fn fetch_effect(effects: &[Effect]) -> (u64, PageQuery) {
    match effects {
        [Effect::FetchPage { generation, query }] => (*generation, query.clone()),
        other => panic!("expected a single FetchPage effect, got {other:?}"),
    }
}

/// Seeds the browse track with one fetched page of 40 out of 100.
fn seeded_browse(state: ExplorerState) -> ExplorerState {
    let (state, effects) = update(state, Msg::EndOfListReached);
    let (generation, _) = fetch_effect(&effects);
    let (state, _) = update(
        state,
        Msg::PageFetched {
            generation,
            result: Ok(FetchedPage {
                listings: listings("a", 40),
                total: 100,
                page: 1,
            }),
        },
    );
    state
}

#[test]
fn short_term_without_active_search_is_ignored() {
    init_logging();
    let state = new_state();
    let (state, effects) = update(state, Msg::SearchChanged("me".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Browse);
    assert_eq!(state.search_term(), "");
}

#[test]
fn three_characters_enter_search_mode_and_fetch() {
    init_logging();
    let state = seeded_browse(new_state());

    let (state, effects) = update(state, Msg::SearchChanged("met".to_string()));
    let (_, query) = fetch_effect(&effects);

    assert_eq!(state.mode(), Mode::Search);
    assert_eq!(query.page, 1);
    assert_eq!(query.search, "met");
    assert!(state.first_fetch());
    assert!(!state.end_reached());
    assert!(state.loading());
    // The search track starts clean; the browse track is untouched.
    assert!(state.current_page().listings.is_empty());
}

#[test]
fn shrinking_term_reverts_to_browse_and_discards_search_results() {
    init_logging();
    let state = seeded_browse(new_state());

    // Active search with a completed fetch.
    let (state, effects) = update(state, Msg::SearchChanged("metamask".to_string()));
    let (generation, _) = fetch_effect(&effects);
    let (state, _) = update(
        state,
        Msg::PageFetched {
            generation,
            result: Ok(FetchedPage {
                listings: listings("m", 2),
                total: 2,
                page: 1,
            }),
        },
    );
    assert_eq!(state.mode(), Mode::Search);
    assert!(state.end_reached());

    // Term shrinks to 2 characters: back to browse.
    let (state, effects) = update(state, Msg::SearchChanged("me".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Browse);
    assert_eq!(state.search_term(), "");
    // end_reached recomputed from the browse track (40 of 100 fetched).
    assert!(!state.end_reached());
    assert_eq!(state.current_page().listings.len(), 40);

    // A new search starts from a clean track, not the discarded one.
    let (state, effects) = update(state, Msg::SearchChanged("rainbow".to_string()));
    let (_, query) = fetch_effect(&effects);
    assert_eq!(query.page, 1);
    assert!(state.current_page().listings.is_empty());
}

#[test]
fn scroll_is_ignored_until_first_search_fetch_lands() {
    init_logging();
    let state = seeded_browse(new_state());

    let (state, effects) = update(state, Msg::SearchChanged("met".to_string()));
    let (generation, _) = fetch_effect(&effects);

    // The sentinel fires while the first search fetch is in flight.
    let (state, effects) = update(state, Msg::EndOfListReached);
    assert!(effects.is_empty());

    // Once it lands, scrolling paginates the search track normally.
    let (state, _) = update(
        state,
        Msg::PageFetched {
            generation,
            result: Ok(FetchedPage {
                listings: listings("m", 40),
                total: 90,
                page: 1,
            }),
        },
    );
    let (_state, effects) = update(state, Msg::EndOfListReached);
    let (_, query) = fetch_effect(&effects);
    assert_eq!(query.page, 2);
    assert_eq!(query.search, "met");
}

#[test]
fn abandoned_search_completion_leaves_the_browse_track_untouched() {
    init_logging();
    let state = seeded_browse(new_state());

    // A search fetch goes out, then the term shrinks below the threshold
    // while it is still in flight.
    let (state, effects) = update(state, Msg::SearchChanged("metamask".to_string()));
    let (generation, _) = fetch_effect(&effects);
    let (state, effects) = update(state, Msg::SearchChanged("me".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Browse);
    assert!(!state.loading());

    // The abandoned completion arrives afterwards; it is stale now and
    // must not be appended to the browse track.
    let (state, effects) = update(
        state,
        Msg::PageFetched {
            generation,
            result: Ok(FetchedPage {
                listings: listings("m", 1),
                total: 1,
                page: 1,
            }),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.current_page().listings.len(), 40);
    assert_eq!(state.current_page().total, 100);
    assert!(state.current_page().listings.len() <= state.current_page().total);
    assert!(!state.end_reached());
    assert!(!state.loading());

    // Browse pagination still works from where it left off.
    let (_state, effects) = update(state, Msg::EndOfListReached);
    let (_, query) = fetch_effect(&effects);
    assert_eq!(query.page, 2);
}

#[test]
fn refreshed_search_resets_the_previous_results() {
    init_logging();
    let state = seeded_browse(new_state());

    let (state, effects) = update(state, Msg::SearchChanged("meta".to_string()));
    let (generation, _) = fetch_effect(&effects);
    let (state, _) = update(
        state,
        Msg::PageFetched {
            generation,
            result: Ok(FetchedPage {
                listings: listings("m", 5),
                total: 5,
                page: 1,
            }),
        },
    );
    assert_eq!(state.current_page().listings.len(), 5);

    let (state, effects) = update(state, Msg::SearchChanged("rainbow".to_string()));
    let (_, query) = fetch_effect(&effects);

    assert_eq!(query.search, "rainbow");
    assert_eq!(query.page, 1);
    assert!(state.current_page().listings.is_empty());
    assert!(!state.end_reached());
}

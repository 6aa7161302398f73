use crate::effect::{Effect, PageQuery, Severity};
use crate::msg::{FetchFailure, FetchedPage, Msg};
use crate::state::{ExplorerState, Mode, PAGE_ENTRIES, SEARCH_MIN_LEN};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ExplorerState, msg: Msg) -> (ExplorerState, Vec<Effect>) {
    let effects = match msg {
        Msg::EndOfListReached => {
            // A fresh search is already driving its own first fetch; the
            // scroll sentinel stays quiet until that one lands.
            if state.mode() == Mode::Search && state.first_fetch {
                Vec::new()
            } else {
                fetch_next_page(&mut state)
            }
        }
        Msg::SearchChanged(term) => {
            if term.chars().count() >= SEARCH_MIN_LEN {
                state.first_fetch = true;
                state.end_reached = false;
                state.search_term = term;
                state.search.reset();
                fetch_next_page(&mut state)
            } else if !state.search_term.is_empty() {
                // Term shrank below the threshold: back to browse mode,
                // prior search results are discarded. An in-flight search
                // fetch is abandoned with them; aging the generation makes
                // its completion stale so it cannot land in the browse
                // track.
                state.search_term.clear();
                state.search.reset();
                state.fetch_generation += 1;
                state.loading = false;
                state.first_fetch = false;
                state.end_reached = state.is_last_page();
                Vec::new()
            } else {
                Vec::new()
            }
        }
        Msg::PageFetched { generation, result } => apply_fetch(&mut state, generation, result),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Guarded fetch trigger: emits a `FetchPage` effect for the next page of
/// the active mode, or nothing when the end was reached or no further page
/// exists.
fn fetch_next_page(state: &mut ExplorerState) -> Vec<Effect> {
    let page_state = state.current_page();
    let more_available =
        page_state.total > PAGE_ENTRIES && page_state.listings.len() < page_state.total;
    if state.end_reached || !(state.first_fetch || more_available) {
        return Vec::new();
    }

    let next_page = if state.first_fetch {
        1
    } else {
        page_state.page + 1
    };
    state.loading = true;
    state.fetch_generation += 1;
    vec![Effect::FetchPage {
        generation: state.fetch_generation,
        query: PageQuery {
            page: next_page,
            entries: PAGE_ENTRIES,
            device: state.environment.device,
            search: state.search_term.clone(),
            version: state.config.protocol_version,
            chains: state.config.chains.join(","),
        },
    }]
}

fn apply_fetch(
    state: &mut ExplorerState,
    generation: u64,
    result: Result<FetchedPage, FetchFailure>,
) -> Vec<Effect> {
    if generation != state.fetch_generation {
        // A newer fetch superseded this one while it was in flight;
        // applying it would clobber fresher state.
        log::debug!(
            "dropping stale fetch completion (generation {generation}, current {})",
            state.fetch_generation
        );
        return Vec::new();
    }

    let effects = match result {
        Ok(page) => {
            let page_state = state.current_page_mut();
            page_state.listings.extend(page.listings);
            page_state.total = page.total;
            page_state.page = page.page;
            state.end_reached = state.is_last_page();
            Vec::new()
        }
        // The previously fetched pages stay on screen; the failure is
        // advisory only.
        Err(failure) => vec![Effect::Toast {
            message: failure.message,
            severity: Severity::Error,
        }],
    };

    state.loading = false;
    state.first_fetch = false;
    effects
}

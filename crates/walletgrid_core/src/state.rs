use crate::config::{ClientSession, DirectoryConfig, Environment};
use crate::wallet::{ExtensionWallet, Listing};

/// Number of listings requested per explorer page.
pub const PAGE_ENTRIES: usize = 40;
/// Minimum search-term length that activates search mode.
pub const SEARCH_MIN_LEN: usize = 3;

/// Which listing track is currently displayed and paginated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
}

/// One track of fetched explorer listings.
///
/// Invariant: `listings.len() <= total` after any successful fetch, and
/// `page` only moves forward on success.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub listings: Vec<Listing>,
    pub total: usize,
    pub page: usize,
}

impl PageState {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State behind the wallet directory view.
///
/// Created on view mount, mutated only through [`crate::update`], dropped
/// on teardown. Configuration, environment, client session and the local
/// extension list are fixed for the lifetime of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    pub(crate) config: DirectoryConfig,
    pub(crate) environment: Environment,
    pub(crate) client: Option<ClientSession>,
    pub(crate) extensions: Vec<ExtensionWallet>,
    pub(crate) browse: PageState,
    pub(crate) search: PageState,
    pub(crate) search_term: String,
    pub(crate) loading: bool,
    pub(crate) first_fetch: bool,
    pub(crate) end_reached: bool,
    pub(crate) fetch_generation: u64,
}

impl ExplorerState {
    pub fn new(
        config: DirectoryConfig,
        environment: Environment,
        client: Option<ClientSession>,
        extensions: Vec<ExtensionWallet>,
    ) -> Self {
        Self {
            config,
            environment,
            client,
            extensions,
            browse: PageState::default(),
            search: PageState::default(),
            search_term: String::new(),
            loading: true,
            first_fetch: true,
            end_reached: false,
            fetch_generation: 0,
        }
    }

    /// Search mode is active iff the settled term reached the threshold.
    pub fn search_active(&self) -> bool {
        self.search_term.chars().count() >= SEARCH_MIN_LEN
    }

    pub fn mode(&self) -> Mode {
        if self.search_active() {
            Mode::Search
        } else {
            Mode::Browse
        }
    }

    /// The page cache backing the active mode.
    pub fn current_page(&self) -> &PageState {
        match self.mode() {
            Mode::Browse => &self.browse,
            Mode::Search => &self.search,
        }
    }

    pub(crate) fn current_page_mut(&mut self) -> &mut PageState {
        match self.mode() {
            Mode::Browse => &mut self.browse,
            Mode::Search => &mut self.search,
        }
    }

    /// End-of-list rule for the active mode: a single page covers
    /// everything, or everything fetched already.
    pub(crate) fn is_last_page(&self) -> bool {
        let page = self.current_page();
        page.total <= PAGE_ENTRIES || page.listings.len() >= page.total
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn first_fetch(&self) -> bool {
        self.first_fetch
    }

    pub fn end_reached(&self) -> bool {
        self.end_reached
    }

    /// Generation tag of the most recently requested fetch; completions
    /// carrying an older tag are dropped as stale.
    pub fn fetch_generation(&self) -> u64 {
        self.fetch_generation
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn client(&self) -> Option<&ClientSession> {
        self.client.as_ref()
    }

    pub fn extensions(&self) -> &[ExtensionWallet] {
        &self.extensions
    }
}

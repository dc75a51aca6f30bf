//! App state and core application logic
//!
//! Owns the section grids, navigation, overlays and search box, runs the
//! startup sequence, and turns key presses into favorite toggles and fetch
//! requests. Fetches run as spawned tasks that report back as [`AppEvent`]s.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info, warn};

use crate::bootstrap;
use crate::models::MediaItem;
use crate::navigation::{Navigation, Section};
use crate::store::{CatalogStore, Favorites, KeyValueStore, MediaFetcher};
use crate::ui::auth::{AuthAction, AuthOverlay};
use crate::ui::detail::DetailView;
use crate::ui::search::SearchBox;
use crate::ui::{render, CardStyle, MediaGrid};

/// Shown once when the startup load fails
pub const LOAD_FAILURE_NOTICE: &str =
    "There was an error loading the content. Please try again later.";

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Requests & Events
// =============================================================================

/// Fetch work for the event loop to run off the UI task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch a section's feed and render it into that section's grid
    Load(Section),
    /// Search the catalog and render the results into home
    Search(String),
}

impl Request {
    /// Run the fetch and package the outcome
    pub async fn execute(self, fetcher: &dyn MediaFetcher) -> AppEvent {
        match self {
            Request::Load(section) => {
                let result = match section {
                    Section::Home | Section::Films => fetcher.list_films().await,
                    Section::Series => fetcher.list_series().await,
                };
                match result {
                    Ok(items) => AppEvent::Loaded { section, items },
                    Err(e) => AppEvent::Failed {
                        section,
                        error: e.to_string(),
                    },
                }
            }
            Request::Search(query) => match fetcher.search(&query).await {
                Ok(items) => AppEvent::SearchResults { query, items },
                Err(e) => AppEvent::Failed {
                    section: Section::Home,
                    error: e.to_string(),
                },
            },
        }
    }
}

/// Completed fetch, applied on the UI task in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Loaded {
        section: Section,
        items: Vec<MediaItem>,
    },
    SearchResults {
        query: String,
        items: Vec<MediaItem>,
    },
    Failed {
        section: Section,
        error: String,
    },
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Error popup message
    pub error: Option<String>,

    pub navigation: Navigation,
    pub search: SearchBox,
    pub home: MediaGrid,
    pub films: MediaGrid,
    pub series: MediaGrid,
    pub detail: DetailView,
    pub auth: AuthOverlay,

    card_style: CardStyle,
    fetcher: Arc<dyn MediaFetcher>,
    favorites: Arc<dyn Favorites>,
    kv: Arc<dyn KeyValueStore>,
    pending: Vec<Request>,
}

impl App {
    /// Create an app over explicit collaborators
    pub fn new(
        fetcher: Arc<dyn MediaFetcher>,
        favorites: Arc<dyn Favorites>,
        kv: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            error: None,

            navigation: Navigation::new(),
            search: SearchBox::new(),
            home: MediaGrid::new("LATEST RELEASES"),
            films: MediaGrid::new("FILMS"),
            series: MediaGrid::new("SERIES"),
            detail: DetailView::new(),
            auth: AuthOverlay::default(),

            card_style: CardStyle::default(),
            fetcher,
            favorites,
            kv,
            pending: Vec::new(),
        }
    }

    /// Create an app where one catalog store plays every role
    pub fn with_store(store: Arc<CatalogStore>) -> Self {
        let kv = store.kv().clone();
        Self::new(store.clone(), store, kv)
    }

    pub fn with_card_style(mut self, style: CardStyle) -> Self {
        self.card_style = style;
        self
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // -------------------------------------------------------------------------
    // Grids
    // -------------------------------------------------------------------------

    pub fn grid(&self, section: Section) -> &MediaGrid {
        match section {
            Section::Home => &self.home,
            Section::Films => &self.films,
            Section::Series => &self.series,
        }
    }

    pub fn grid_mut(&mut self, section: Section) -> &mut MediaGrid {
        match section {
            Section::Home => &mut self.home,
            Section::Films => &mut self.films,
            Section::Series => &mut self.series,
        }
    }

    /// Grid of the visible section, if any
    pub fn active_grid(&self) -> Option<&MediaGrid> {
        self.navigation.active_section().map(|s| self.grid(s))
    }

    fn active_grid_mut(&mut self) -> Option<&mut MediaGrid> {
        let section = self.navigation.active_section()?;
        Some(self.grid_mut(section))
    }

    /// Render `items` into a section's grid with the configured card style
    pub fn render_into(&mut self, section: Section, items: &[MediaItem]) {
        let renderer = self.card_style.renderer(self.favorites.as_ref());
        let grid = match section {
            Section::Home => &mut self.home,
            Section::Films => &mut self.films,
            Section::Series => &mut self.series,
        };
        let selected = grid.list.selected;
        render(items, Some(grid), renderer.as_ref());
        grid.select(selected);
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Queue a fetch for the event loop
    pub fn request(&mut self, request: Request) {
        debug!("Queued {:?}", request);
        self.pending.push(request);
    }

    /// Queue a section load and show its loading marker
    pub fn load(&mut self, section: Section) {
        self.grid_mut(section).set_loading(true);
        self.request(Request::Load(section));
    }

    /// Drain queued requests
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.pending)
    }

    /// Spawn every queued request; results come back through `tx`
    pub fn dispatch(&mut self, tx: &UnboundedSender<AppEvent>) {
        for request in self.take_requests() {
            let fetcher = self.fetcher.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let event = request.execute(fetcher.as_ref()).await;
                if tx.send(event).is_err() {
                    debug!("Event loop gone, dropping fetch result");
                }
            });
        }
    }

    /// Apply a completed fetch
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Loaded { section, items } => {
                debug!("Rendering {} items into {}", items.len(), section);
                self.render_into(section, &items);
            }
            AppEvent::SearchResults { query, items } => {
                info!("Showing {} results for {:?}", items.len(), query);
                self.render_into(Section::Home, &items);
                self.show_home();
            }
            AppEvent::Failed { section, error } => {
                error!("Loading {} failed: {}", section, error);
                self.grid_mut(section).set_loading(false);
                self.set_error(format!("Could not load {}: {}", section.label(), error));
            }
        }
    }

    fn show_home(&mut self) {
        if self.navigation.activate(Section::Home).is_none() {
            self.navigation.show(Section::Home);
        }
    }

    // -------------------------------------------------------------------------
    // Startup
    // -------------------------------------------------------------------------

    /// Show the welcome overlay on first run
    pub fn bootstrap(&mut self) {
        if bootstrap::is_new_user(self.kv.as_ref()) {
            info!("First run, showing welcome overlay");
            self.auth.show();
        }
    }

    /// Startup sequence: home feed first, then navigation, then the
    /// remaining sections in parallel.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.home.set_loading(true);
        let latest = self.fetcher.list_films().await?;
        self.render_into(Section::Home, &latest);

        self.navigation.setup_navigation();
        self.show_home();

        self.load(Section::Films);
        self.load(Section::Series);
        Ok(())
    }

    /// Run the startup sequence, turning any failure into one notice
    pub async fn start(&mut self) {
        if let Err(e) = self.run().await {
            error!("Error loading media: {:#}", e);
            self.home.set_loading(false);
            self.set_error(LOAD_FAILURE_NOTICE);
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Focus the search box
    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    /// Submit the search box: search on a query, reload films when empty
    pub fn submit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        let query = self.search.trimmed().to_string();
        if query.is_empty() {
            self.request(Request::Load(Section::Home));
            self.show_home();
        } else {
            self.request(Request::Search(query));
        }
    }

    // -------------------------------------------------------------------------
    // Favorites & Details
    // -------------------------------------------------------------------------

    /// Flip an item's favorite state and queue a re-render of the visible
    /// section. Returns the resulting state.
    pub fn toggle_favorite(&mut self, item: &MediaItem) -> bool {
        let id = item.id();
        let result = if self.favorites.is_favorite(id) {
            self.favorites.remove_favorite(id).map(|_| false)
        } else {
            self.favorites.add_favorite(item).map(|_| true)
        };

        let state = match result {
            Ok(state) => {
                info!(
                    "{} {} favorites",
                    item.title(),
                    if state { "added to" } else { "removed from" }
                );
                state
            }
            Err(e) => {
                error!("Could not update favorites for {}: {}", id, e);
                self.set_error(format!("Could not update favorites: {}", e));
                self.favorites.is_favorite(id)
            }
        };

        if let Some(section) = self.navigation.active_section() {
            self.request(Request::Load(section));
        }
        state
    }

    /// Toggle the selected card's favorite without opening details
    pub fn toggle_selected(&mut self) {
        let Some(item) = self
            .active_grid()
            .and_then(MediaGrid::selected_card)
            .map(|card| card.item.clone())
        else {
            return;
        };

        let state = self.toggle_favorite(&item);
        if let Some(card) = self.active_grid_mut().and_then(MediaGrid::selected_card_mut) {
            card.favorited = state;
        }
    }

    /// Toggle from the detail overlay; patches matching cards everywhere
    pub fn toggle_detail_favorite(&mut self) {
        let Some(item) = self.detail.media().cloned() else {
            return;
        };

        let state = self.toggle_favorite(&item);
        self.detail.set_favorited(state);
        for section in Section::ALL {
            self.grid_mut(section).set_favorited(item.id(), state);
        }
    }

    /// Open the detail overlay for the selected card
    pub fn open_detail(&mut self) {
        let Some(item) = self
            .active_grid()
            .and_then(MediaGrid::selected_card)
            .map(|card| card.item.clone())
        else {
            return;
        };

        let favorited = self.favorites.is_favorite(item.id());
        self.detail.open(item, favorited);
    }

    /// Dismiss the welcome overlay; every control does the same
    pub fn dismiss_auth(&mut self, action: AuthAction) {
        debug!("Welcome overlay dismissed via {}", action.label());
        self.auth.hide();
        if let Err(e) = bootstrap::mark_returning(self.kv.as_ref()) {
            warn!("Could not persist first-run flag: {}", e);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Any key dismisses the error popup
        self.clear_error();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.auth.is_visible() {
            return self.handle_auth_key(key);
        }
        if self.detail.is_open() {
            return self.handle_detail_key(key);
        }
        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('l') => self.dismiss_auth(AuthAction::Login),
            KeyCode::Char('r') => self.dismiss_auth(AuthAction::Register),
            KeyCode::Esc | KeyCode::Char('x') => self.dismiss_auth(AuthAction::Close),
            KeyCode::Enter => self.dismiss_auth(self.auth.focused()),
            KeyCode::Left | KeyCode::BackTab => self.auth.focus_prev(),
            KeyCode::Right | KeyCode::Tab => self.auth.focus_next(),
            _ => {}
        }
        // The overlay swallows everything while shown
        true
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => {
                self.detail.close();
                true
            }
            KeyCode::Char('f') | KeyCode::Enter => {
                self.toggle_detail_favorite();
                true
            }
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            _ => false,
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => self.submit_search(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.search.clear(),
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => return false,
        }
        true
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        let current_link = self.navigation.active_link().unwrap_or(Section::Home);

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') | KeyCode::Char('s') => self.focus_search(),
            KeyCode::Tab => {
                self.navigation.activate(current_link.next());
            }
            KeyCode::BackTab => {
                self.navigation.activate(current_link.prev());
            }
            KeyCode::Char('1') => {
                self.navigation.activate(Section::Home);
            }
            KeyCode::Char('2') => {
                self.navigation.activate(Section::Films);
            }
            KeyCode::Char('3') => {
                self.navigation.activate(Section::Series);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(grid) = self.active_grid_mut() {
                    grid.list.up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(grid) = self.active_grid_mut() {
                    grid.list.down();
                }
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if let Some(grid) = self.active_grid_mut() {
                    grid.list.first();
                }
            }
            KeyCode::End | KeyCode::Char('G') => {
                if let Some(grid) = self.active_grid_mut() {
                    grid.list.last();
                }
            }
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('f') => self.toggle_selected(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CatalogError, MemoryStore};
    use async_trait::async_trait;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn store() -> Arc<CatalogStore> {
        Arc::new(CatalogStore::new(Arc::new(MemoryStore::new())).with_latency(Duration::ZERO))
    }

    /// App after startup with every queued load applied
    async fn started_app(store: Arc<CatalogStore>) -> App {
        let mut app = App::with_store(store.clone());
        app.start().await;
        for request in app.take_requests() {
            let event = request.execute(store.as_ref()).await;
            app.apply(event);
        }
        app
    }

    struct FailingFetcher;

    #[async_trait]
    impl MediaFetcher for FailingFetcher {
        async fn list_films(&self) -> crate::store::catalog::Result<Vec<MediaItem>> {
            Err(CatalogError::Fetch("offline".into()))
        }
        async fn list_series(&self) -> crate::store::catalog::Result<Vec<MediaItem>> {
            Err(CatalogError::Fetch("offline".into()))
        }
        async fn search(&self, _query: &str) -> crate::store::catalog::Result<Vec<MediaItem>> {
            Err(CatalogError::Fetch("offline".into()))
        }
    }

    // -------------------------------------------------------------------------
    // Startup Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_run_renders_home_then_queues_sections() {
        let store = store();
        let mut app = App::with_store(store);
        app.start().await;

        assert_eq!(app.home.len(), 5);
        assert!(!app.home.is_loading());
        assert_eq!(app.navigation.active_section(), Some(Section::Home));
        assert_eq!(app.navigation.active_link(), Some(Section::Home));
        assert!(app.films.is_loading());
        assert!(app.series.is_loading());
        assert_eq!(
            app.take_requests(),
            vec![Request::Load(Section::Films), Request::Load(Section::Series)]
        );
        assert!(app.error.is_none());
    }

    #[tokio::test]
    async fn test_start_failure_sets_single_notice() {
        let store = store();
        let mut app = App::new(Arc::new(FailingFetcher), store.clone(), store.kv().clone());
        app.start().await;

        assert_eq!(app.error.as_deref(), Some(LOAD_FAILURE_NOTICE));
        assert!(!app.home.is_loading());
        assert!(app.take_requests().is_empty());
        // Navigation never got set up
        assert_eq!(app.navigation.active_section(), None);
    }

    #[tokio::test]
    async fn test_sections_apply_in_any_order() {
        let store = store();
        let mut app = App::with_store(store.clone());
        app.start().await;

        let mut events = Vec::new();
        for request in app.take_requests() {
            events.push(request.execute(store.as_ref()).await);
        }
        events.reverse();
        for event in events {
            app.apply(event);
        }

        assert_eq!(app.films.len(), 5);
        assert_eq!(app.series.len(), 4);
        assert!(!app.films.is_loading());
    }

    // -------------------------------------------------------------------------
    // Favorite Toggle Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_toggle_card_patches_and_requests_rerender() {
        let store = store();
        let mut app = started_app(store.clone()).await;
        app.navigation.activate(Section::Series);
        app.series.list.down();

        app.handle_key(key(KeyCode::Char('f')));

        assert!(store.is_favorite("Game-of-Thrones-2011"));
        assert!(app.series.cards()[1].favorited);
        assert!(!app.detail.is_open());
        assert_eq!(app.take_requests(), vec![Request::Load(Section::Series)]);

        app.handle_key(key(KeyCode::Char('f')));
        assert!(!store.is_favorite("Game-of-Thrones-2011"));
        assert!(!app.series.cards()[1].favorited);
    }

    #[tokio::test]
    async fn test_rerender_keeps_selection() {
        let store = store();
        let mut app = started_app(store.clone()).await;
        app.home.list.down();
        app.home.list.down();
        app.toggle_selected();

        for request in app.take_requests() {
            let event = request.execute(store.as_ref()).await;
            app.apply(event);
        }
        assert_eq!(app.home.list.selected, 2);
        assert!(app.home.cards()[2].favorited);
    }

    #[tokio::test]
    async fn test_detail_toggle_patches_every_grid() {
        let store = store();
        let mut app = started_app(store.clone()).await;
        app.navigation.activate(Section::Films);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.detail.is_open());
        assert_eq!(app.detail.button_label(), "Add to Favorites");

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.detail.button_label(), "Remove from Favorites");
        assert!(app.home.cards()[0].favorited);
        assert!(app.films.cards()[0].favorited);
        assert!(store.is_favorite("El-Padrino-1972"));

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.detail.is_open());
    }

    #[tokio::test]
    async fn test_detail_reflects_stored_state() {
        let store = store();
        let mut app = started_app(store.clone()).await;
        let item = app.home.cards()[3].item.clone();
        store.add_favorite(&item).unwrap();

        app.home.list.select(3);
        app.open_detail();
        assert!(app.detail.is_favorited());
    }

    // -------------------------------------------------------------------------
    // Search Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_search_results_render_into_home() {
        let store = store();
        let mut app = started_app(store.clone()).await;
        app.navigation.activate(Section::Series);

        app.handle_key(key(KeyCode::Char('/')));
        for c in "nolan".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);

        let requests = app.take_requests();
        assert_eq!(requests, vec![Request::Search("nolan".into())]);
        for request in requests {
            let event = request.execute(store.as_ref()).await;
            app.apply(event);
        }

        let titles: Vec<_> = app.home.cards().iter().map(|c| c.item.title().to_string()).collect();
        assert_eq!(titles, vec!["El origen", "Interstellar"]);
        assert_eq!(app.navigation.active_section(), Some(Section::Home));
    }

    #[tokio::test]
    async fn test_empty_search_reloads_films() {
        let store = store();
        let mut app = started_app(store).await;
        app.navigation.activate(Section::Films);

        app.focus_search();
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.take_requests(), vec![Request::Load(Section::Home)]);
        assert_eq!(app.navigation.active_section(), Some(Section::Home));
    }

    #[tokio::test]
    async fn test_ctrl_u_clears_query_then_enter_resets_home() {
        let mut app = started_app(store()).await;
        app.focus_search();
        for c in "nolan".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.search.query, "");
        assert_eq!(app.input_mode, InputMode::Editing);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.take_requests(), vec![Request::Load(Section::Home)]);
    }

    #[tokio::test]
    async fn test_failed_event_surfaces_error() {
        let store = store();
        let mut app = App::with_store(store);
        app.load(Section::Series);
        let event = Request::Load(Section::Series).execute(&FailingFetcher).await;
        app.apply(event);

        assert!(!app.series.is_loading());
        assert!(app.error.as_deref().unwrap_or_default().contains("offline"));
    }

    // -------------------------------------------------------------------------
    // Overlay & Key Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_bootstrap_shows_overlay_once() {
        let store = store();
        let mut app = App::with_store(store.clone());
        app.bootstrap();
        assert!(app.auth.is_visible());

        // Overlay swallows keys
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.running);

        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.auth.is_visible());

        let mut again = App::with_store(store);
        again.bootstrap();
        assert!(!again.auth.is_visible());
    }

    #[test]
    fn test_every_auth_control_dismisses() {
        for code in [
            KeyCode::Char('l'),
            KeyCode::Char('r'),
            KeyCode::Esc,
            KeyCode::Char('x'),
            KeyCode::Enter,
        ] {
            let store = store();
            let mut app = App::with_store(store.clone());
            app.bootstrap();
            app.handle_key(key(code));
            assert!(!app.auth.is_visible(), "{:?} should dismiss", code);
            assert!(!bootstrap::is_new_user(store.kv().as_ref()));
        }
    }

    #[test]
    fn test_links_inactive_before_startup() {
        let mut app = App::with_store(store());
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.navigation.active_section(), None);
    }

    #[tokio::test]
    async fn test_tab_cycles_sections() {
        let mut app = started_app(store()).await;
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.navigation.active_section(), Some(Section::Films));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.navigation.active_section(), Some(Section::Series));
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.navigation.active_section(), Some(Section::Films));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::with_store(store());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = App::with_store(store());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_any_key_clears_error() {
        let mut app = App::with_store(store());
        app.set_error("boom");
        app.handle_key(key(KeyCode::Char('z')));
        assert!(app.error.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_delivers_events() {
        let store = store();
        let mut app = App::with_store(store);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        app.load(Section::Films);
        app.load(Section::Series);
        app.dispatch(&tx);

        for _ in 0..2 {
            let event = rx.recv().await.unwrap();
            app.apply(event);
        }
        assert_eq!(app.films.len(), 5);
        assert_eq!(app.series.len(), 4);
    }
}

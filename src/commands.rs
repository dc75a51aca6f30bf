//! CLI Command Handlers
//!
//! Implements all CLI commands on top of the catalog store.
//! Each handler takes CLI args, the shared context and Output, returns ExitCode.

use std::sync::Arc;

use tracing::{debug, error};

use crate::cli::{
    validate_media_id, Cli, ExitCode, FavAction, FavCmd, FavoriteChange, InfoCmd, ListCmd, Output,
    SearchCmd,
};
use crate::config::Config;
use crate::models::MediaItem;
use crate::store::{
    CatalogError, CatalogStore, Favorites, FileStore, KeyValueStore, MediaFetcher, MemoryStore,
};
use crate::ui::{CardStyle, ItemRenderer};

// =============================================================================
// Context
// =============================================================================

/// Everything a command needs: the store and the effective settings
pub struct Context {
    pub store: Arc<CatalogStore>,
    pub card_style: CardStyle,
}

impl Context {
    /// Resolve config, then apply CLI overrides on top
    pub fn from_cli(cli: &Cli) -> Self {
        let config = match &cli.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        Self::build(cli, &config)
    }

    pub fn build(cli: &Cli, config: &Config) -> Self {
        let kv: Arc<dyn KeyValueStore> = if cli.ephemeral {
            debug!("Using in-memory storage");
            Arc::new(MemoryStore::new())
        } else {
            let path = match &cli.data_dir {
                Some(dir) => dir.join(crate::config::STORE_FILE),
                None => config.store_path(),
            };
            debug!("Using storage at {}", path.display());
            Arc::new(FileStore::new(path))
        };

        let latency = cli
            .delay_ms
            .map(std::time::Duration::from_millis)
            .unwrap_or_else(|| config.fetch_delay());

        Self {
            store: Arc::new(CatalogStore::new(kv).with_latency(latency)),
            card_style: config.card_style(),
        }
    }

    /// Context over an existing store, for tests and embedding
    pub fn with_store(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            card_style: CardStyle::default(),
        }
    }

    fn renderer(&self) -> Box<dyn ItemRenderer + '_> {
        self.card_style.renderer(self.store.as_ref())
    }
}

/// One printable line per item, star marking favorites
fn card_lines(items: &[MediaItem], renderer: &dyn ItemRenderer) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let card = renderer.render_item(item);
            let star = if card.favorited { "★" } else { "☆" };
            if card.summary.is_empty() {
                format!("{} {}  [{}]", star, card.heading, item.id())
            } else {
                format!("{} {}  [{}]\n    {}", star, card.heading, item.id(), card.summary)
            }
        })
        .collect()
}

fn print_items(items: &[MediaItem], ctx: &Context, output: &Output) -> ExitCode {
    let result = if output.json {
        output.print_list(items)
    } else {
        output.print_list(&card_lines(items, ctx.renderer().as_ref()))
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to write output: {}", e), ExitCode::Error),
    }
}

fn fail(err: CatalogError, output: &Output) -> ExitCode {
    error!("Command failed: {}", err);
    output.error(err.to_string(), ExitCode::from(&err))
}

fn truncate(mut items: Vec<MediaItem>, limit: Option<usize>) -> Vec<MediaItem> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

// =============================================================================
// Listing Commands
// =============================================================================

pub async fn films_cmd(cmd: ListCmd, ctx: &Context, output: &Output) -> ExitCode {
    output.info("Loading films...");
    match ctx.store.list_films().await {
        Ok(items) => print_items(&truncate(items, cmd.limit), ctx, output),
        Err(e) => fail(e, output),
    }
}

pub async fn series_cmd(cmd: ListCmd, ctx: &Context, output: &Output) -> ExitCode {
    output.info("Loading series...");
    match ctx.store.list_series().await {
        Ok(items) => print_items(&truncate(items, cmd.limit), ctx, output),
        Err(e) => fail(e, output),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, ctx: &Context, output: &Output) -> ExitCode {
    // An empty query lists films, as the search box does
    let query = cmd.query.trim();
    let fetched = if query.is_empty() {
        output.info("Empty query, loading films...");
        ctx.store.list_films().await
    } else {
        output.info(format!("Searching for: {}", query));
        ctx.store.search(query).await
    };

    match fetched {
        Ok(mut results) => {
            if let Some(kind) = cmd.kind {
                results.retain(|item| kind.matches(item.kind()));
            }
            if results.is_empty() {
                output.info("No results found");
            }
            print_items(&truncate(results, cmd.limit), ctx, output)
        }
        Err(e) => fail(e, output),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, ctx: &Context, output: &Output) -> ExitCode {
    if let Err(e) = validate_media_id(&cmd.id) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    let Some(item) = ctx.store.find(&cmd.id).cloned() else {
        return fail(CatalogError::NotFound(cmd.id), output);
    };

    let result = if output.json {
        output.print(&item)
    } else {
        let favorite = if ctx.store.is_favorite(item.id()) {
            "★ favorite"
        } else {
            "☆ not a favorite"
        };
        output.print(format!(
            "{}\nYear: {}\n{}\n{}",
            item.title(),
            item.year(),
            item.detail_line(),
            favorite
        ))
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to write output: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Favorites Commands
// =============================================================================

pub async fn favorites_cmd(cmd: ListCmd, ctx: &Context, output: &Output) -> ExitCode {
    let mut favorites = ctx.store.list_favorites();
    if let Some(limit) = cmd.limit {
        favorites.truncate(limit);
    }

    if favorites.is_empty() {
        output.info("No favorites yet. Add one with: mediashelf fav add <id>");
    }

    let result = if output.json {
        output.print_list(&favorites)
    } else {
        let items: Vec<MediaItem> = favorites.iter().map(|fav| fav.to_media()).collect();
        let renderer = crate::ui::CompactRenderer::new(ctx.store.as_ref());
        output.print_list(&card_lines(&items, &renderer))
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to write output: {}", e), ExitCode::Error),
    }
}

/// Apply `fav add` / `fav remove` and report the outcome
pub fn apply_fav(action: &FavAction, store: &CatalogStore) -> Result<FavoriteChange, CatalogError> {
    match action {
        FavAction::Add { id } => {
            let item = store
                .find(id)
                .cloned()
                .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
            let changed = store.add_favorite(&item)?;
            Ok(FavoriteChange {
                id: id.clone(),
                favorite: true,
                changed,
            })
        }
        FavAction::Remove { id } => {
            let changed = store.remove_favorite(id)?;
            Ok(FavoriteChange {
                id: id.clone(),
                favorite: false,
                changed,
            })
        }
    }
}

pub async fn fav_cmd(cmd: FavCmd, ctx: &Context, output: &Output) -> ExitCode {
    if let Err(e) = validate_media_id(cmd.action.id()) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    match apply_fav(&cmd.action, &ctx.store) {
        Ok(change) => match output.print(&change) {
            Ok(()) => ExitCode::Success,
            Err(e) => output.error(format!("Failed to write output: {}", e), ExitCode::Error),
        },
        Err(e) => fail(e, output),
    }
}

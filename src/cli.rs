//! CLI - Command Line Interface for mediashelf
//!
//! Every catalog and favorites action the TUI offers is scriptable.
//! Output is JSON when asked for or when stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Browse the catalog
//! mediashelf films
//! mediashelf search nolan --json
//!
//! # Manage favorites
//! mediashelf fav add El-Padrino-1972
//! mediashelf favorites
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::MediaKind;
use crate::store::CatalogError;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Media id not in the catalog
    NotFound = 3,
    /// Storage could not be read or written
    StorageError = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

impl From<&CatalogError> for ExitCode {
    fn from(err: &CatalogError) -> ExitCode {
        match err {
            CatalogError::Store(_) => ExitCode::StorageError,
            CatalogError::NotFound(_) => ExitCode::NotFound,
            CatalogError::Fetch(_) => ExitCode::Error,
        }
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// mediashelf - browse a film and series catalog, keep favorites
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "mediashelf",
    version,
    about = "Browse films and series, keep a favorites shelf",
    long_about = "A terminal catalog browser with search and persistent favorites.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  mediashelf                          Launch interactive TUI\n\
                  mediashelf search nolan             Search titles and directors\n\
                  mediashelf info Parasite-2019       Show one item\n\
                  mediashelf fav add Parasite-2019    Add to favorites"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding storage.json (overrides config and MEDIASHELF_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Simulated fetch latency in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Keep storage in memory; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every film
    #[command(visible_alias = "f")]
    Films(ListCmd),

    /// List every series
    #[command(visible_alias = "tv")]
    Series(ListCmd),

    /// Search titles and directors (case-insensitive substring)
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Show one item by id
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List stored favorites
    #[command(visible_alias = "favs")]
    Favorites(ListCmd),

    /// Add or remove a favorite
    Fav(FavCmd),
}

/// Shared options for listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct ListCmd {
    /// Maximum number of items to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchCmd {
    /// Search query
    pub query: String,

    /// Only return one kind of item
    #[arg(long, short = 't', value_enum)]
    pub kind: Option<KindFilter>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct InfoCmd {
    /// Media id, e.g. El-Padrino-1972
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct FavCmd {
    #[command(subcommand)]
    pub action: FavAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavAction {
    /// Add a catalog item to favorites
    Add {
        /// Media id
        id: String,
    },
    /// Remove an item from favorites
    #[command(visible_alias = "rm")]
    Remove {
        /// Media id
        id: String,
    },
}

impl FavAction {
    pub fn id(&self) -> &str {
        match self {
            FavAction::Add { id } | FavAction::Remove { id } => id,
        }
    }
}

/// Media kind filter for search
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Film,
    Series,
}

impl KindFilter {
    pub fn matches(self, kind: MediaKind) -> bool {
        matches!(
            (self, kind),
            (KindFilter::Film, MediaKind::Film) | (KindFilter::Series, MediaKind::Series)
        )
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Result of `fav add` / `fav remove`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteChange {
    pub id: String,
    /// Favorite state after the command
    pub favorite: bool,
    /// Whether storage content changed
    pub changed: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data: JSON envelope, or one `Display` line per entry
    pub fn print_list<T: Serialize + std::fmt::Display>(&self, items: &[T]) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(items);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for item in items {
                println!("{}", item);
            }
        }
        Ok(())
    }

    /// Print a single value
    pub fn print<T: Serialize + std::fmt::Display>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", data);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

impl std::fmt::Display for FavoriteChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match (self.favorite, self.changed) {
            (true, true) => "Added",
            (true, false) => "Already a favorite:",
            (false, true) => "Removed",
            (false, false) => "Not a favorite:",
        };
        write!(f, "{} {}", verb, self.id)
    }
}

/// Validate media id format: `{Title-With-Hyphens}-{year}`
pub fn validate_media_id(id: &str) -> Result<&str, &'static str> {
    if id.is_empty() {
        return Err("Media id cannot be empty");
    }
    if id.chars().any(char::is_whitespace) {
        return Err("Media id cannot contain whitespace (use hyphens, e.g. El-Padrino-1972)");
    }

    let Some((title, year)) = id.rsplit_once('-') else {
        return Err("Media id must end with -YEAR (e.g. Parasite-2019)");
    };
    // Years are u16, so at most five digits
    if title.is_empty() || !(1..=5).contains(&year.len()) || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err("Media id must end with -YEAR (e.g. Parasite-2019)");
    }
    Ok(id)
}

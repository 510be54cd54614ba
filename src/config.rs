//! Command-line options and the session settings derived from them.

use clap::Parser;

use crate::id::{IdGenerator, RandomIds, SequentialIds};

/// Log filter used when `RUST_LOG` is unset. Rejected logins are logged at
/// debug so the reason for a refusal never reaches the console.
pub const DEFAULT_LOG_FILTER: &str = "library_desk=warn";

/// Console library desk: sign up, log in, manage accounts and books.
#[derive(Debug, Parser)]
#[command(name = "library_desk", version, about)]
pub struct Cli {
    /// Seed for the identifier generator (reproducible identifiers).
    #[arg(long, env = "LIBRARY_DESK_SEED")]
    pub seed: Option<u64>,

    /// Number identifiers 1, 2, 3... instead of drawing them at random.
    /// Takes precedence over `--seed`.
    #[arg(long)]
    pub sequential_ids: bool,

    /// Do not clear the screen between menus.
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for Enter after each action.
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            clear_screen: !self.no_clear,
            pause: !self.no_pause,
        }
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match (self.sequential_ids, self.seed) {
            (true, _) => Box::new(SequentialIds::new()),
            (false, Some(seed)) => Box::new(RandomIds::seeded(seed)),
            (false, None) => Box::new(RandomIds::new()),
        }
    }
}

/// Presentation switches for a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print a screenful of blank lines before each menu.
    pub clear_screen: bool,
    /// Wait for Enter after each action.
    pub pause: bool,
}

impl SessionConfig {
    /// No screen clearing and no pauses. Used for scripted input.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            pause: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause: true,
        }
    }
}

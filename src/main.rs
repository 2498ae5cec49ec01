use std::io::IsTerminal;

use anyhow::Result;

use headsmith::app::{App, Workspace};
use headsmith::clipboard;
use headsmith::config::{self, Config};
use headsmith::logging;
use headsmith::profile::ProfileStore;

fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    // Initialize file logging BEFORE any tracing calls
    let (log_file_info, _guard) = logging::init_file_logging(config::logs_dir())?;
    tracing::info!("Logging to: {}", log_file_info.path.display());

    // Broken settings never stop a heading from being drawn
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        eprintln!("warning: {:#}; using default config", e);
        Config::default()
    });

    if let Err(e) = logging::cleanup_old_logs(&config::logs_dir(), config.log_retention_days) {
        tracing::warn!("Log cleanup failed: {}", e);
    }

    let store = ProfileStore::load().unwrap_or_else(|e| {
        tracing::warn!("Using default settings: {:#}", e);
        eprintln!("warning: {:#}", e);
        ProfileStore::new()
    });

    let workspace = Workspace::new(store, config, config::config_file_path(), clipboard::open());
    let stdout = std::io::stdout();
    let mut app = App::new(workspace).with_color(stdout.is_terminal());

    // Arguments run a single command, e.g. `headsmith heading "Release notes"`
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return app.run_once(args, stdout.lock());
    }

    let stdin = std::io::stdin();
    app.run(stdin.lock(), stdout.lock())
}

// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, open the library and hand it to the
//   UI loop.
// - Returns `anyhow::Result` so a corrupt storage file aborts startup with
//   a readable message instead of losing data.

use anyhow::Context;
use bookshelf_cli::{config::Config, library::Library, ui::main_menu};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bookshelf_cli=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Storage path comes from `BOOKSHELF_FILE`, or `library.json` in the
    // working directory. See `config::Config::from_env`.
    let config = Config::from_env();
    tracing::info!(path = %config.storage_path.display(), "Starting bookshelf v{}", env!("CARGO_PKG_VERSION"));

    let library = Library::open(&config.storage_path).with_context(|| {
        format!("Failed to open library at {}", config.storage_path.display())
    })?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(library)?;
    Ok(())
}

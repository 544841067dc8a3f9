use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use contact_manager::core::config::{self, ResolvedConfig, StartupNote};
use contact_manager::core::{App, ContactStore};
use contact_manager::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(
    name = "contact-manager",
    version,
    about = "Manage a small list of contacts stored in a CSV file"
)]
struct Args {
    /// Contacts file to open (overrides the config file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut notes = Vec::new();
    let file_config = match config::load_config(&mut notes) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("contact-manager: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.file.as_deref(),
        args.log_level.as_deref(),
        &mut notes,
    );

    init_logging(&resolved);
    replay_notes(&notes);
    log::info!(
        "Contact manager starting with {}",
        resolved.contacts_file.display()
    );

    // A file that exists but cannot be read or parsed aborts startup;
    // carrying on would overwrite it with an empty list on the first save.
    let store = match ContactStore::open(resolved.contacts_file.clone()) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load {}: {}", resolved.contacts_file.display(), e);
            eprintln!(
                "contact-manager: cannot load {}: {e}",
                resolved.contacts_file.display()
            );
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = tui::run(App::new(store)) {
        log::error!("Terminal error: {}", e);
        eprintln!("contact-manager: terminal error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Config is read before the logger exists; flush what it had to say.
/// Warnings also go to stderr while the terminal is still ours.
fn replay_notes(notes: &[StartupNote]) {
    for note in notes {
        log::log!(note.level, "{}", note.message);
        if note.level <= log::Level::Warn {
            eprintln!("contact-manager: {}", note.message);
        }
    }
}

/// File logger: the terminal belongs to the UI, so nothing goes to stderr.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

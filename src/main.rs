mod config;
mod diary_entry;
mod diary_state;
mod entry_draft;
mod error;
mod logging;
mod ui;

use clap::Parser;
use color_eyre::Result;
use config::Paths;
use diary_state::{DiaryState, LoadOutcome};
use entry_draft::EntryDraft;
use std::error::Error;
use std::path::PathBuf;
use ui::{Action, MenuItem, UI};

/// Dagboken - a picture diary for children.
#[derive(Parser, Debug)]
#[command(name = "dagboken", version, about)]
struct Cli {
    /// Directory holding diary.json (defaults to the user config dir).
    #[arg(long, env = "DAGBOKEN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let paths = Paths::resolve(cli.data_dir.as_deref());
    paths.ensure_dir()?;
    logging::init(cli.debug, &paths.log_file);
    tracing::info!(
        app_id = config::APP_ID,
        version = config::APP_VERSION,
        data_dir = %paths.data_dir.display(),
        "Starting"
    );

    let (mut diary_state, outcome) = DiaryState::load_from_file(&paths.diary_file)?;

    ui::install_panic_hook();
    let mut ui = UI::new()?;
    if let LoadOutcome::Recovered { backup } = &outcome {
        ui.set_error(format!(
            "Diary file was unreadable and was moved to {}",
            backup.display()
        ));
    }

    loop {
        ui.display(&diary_state)?;

        if let Some(action) = ui.handle_input(&diary_state)? {
            match action {
                Action::Write => write_entry(&mut ui, &mut diary_state)?,
                Action::Menu => match ui.show_menu(&diary_state)? {
                    Some(MenuItem::About) => ui.show_about(&diary_state)?,
                    Some(MenuItem::Quit) => break,
                    None => {}
                },
                Action::About => ui.show_about(&diary_state)?,
                Action::Quit => break,
                Action::Scroll(_) => {}
            }
        }
    }

    tracing::info!(entries = diary_state.get_entries().len(), "Exiting");
    Ok(())
}

/// Keep the dialog open with the same draft until the entry is saved or
/// the user cancels.
fn write_entry(ui: &mut UI, diary_state: &mut DiaryState) -> Result<()> {
    let mut draft = EntryDraft::default();
    ui.clear_status();
    while ui.compose_entry(diary_state, &mut draft)? {
        match diary_state.add_entry(draft.to_entry()) {
            Ok(()) => {
                ui.set_status("Entry saved");
                return Ok(());
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %diary_state.path().display(),
                    "Failed to save entry"
                );
                let cause = e.source().map(|s| format!(": {s}")).unwrap_or_default();
                ui.set_error(format!("Could not save: {e}{cause}"));
            }
        }
    }
    tracing::debug!("New entry cancelled");
    Ok(())
}

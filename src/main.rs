use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use taskdeck::core::config::{self, CliOverrides, ConfigNotes};
use taskdeck::core::query::{Filter, SortKey, SortOrder};
use taskdeck::tui;

#[derive(Parser)]
#[command(name = "taskdeck", about = "Keyboard-driven task manager for the terminal")]
struct Args {
    /// Initial status filter
    #[arg(long, value_enum)]
    filter: Option<Filter>,

    /// Initial sort key
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Initial sort order
    #[arg(long, value_enum)]
    order: Option<SortOrder>,

    /// How long status toasts stay visible, in milliseconds
    #[arg(long = "toast-ms")]
    toast_ms: Option<u64>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(self) -> CliOverrides {
        CliOverrides {
            filter: self.filter,
            sort_key: self.sort,
            sort_order: self.order,
            toast_timeout_ms: self.toast_ms,
            log_level: self.log_level,
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config decides where and how much to log, so it is loaded before the
    // logger exists. Its diagnostics are held in `notes` until then. A
    // malformed file aborts startup.
    let mut notes = ConfigNotes::default();
    let file_config = config::load_config(&mut notes)?;
    let resolved = config::resolve(&file_config, &args.overrides(), &mut notes);

    // Initialize file logger
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Taskdeck starting up");
    notes.replay();
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `devhub_core` wiring without any UI shell.
//! - Print a deterministic summary of the seeded workspace.
//!
//! Usage: `devhub [config.json]`. Set `DEVHUB_LOG_DIR` to an absolute path
//! to enable file logs.

use std::process::ExitCode;

use devhub_core::session::MemoryThemeStore;
use devhub_core::{
    init_logging, AppSession, LogSettings, ProjectStatus, Workspace, WorkspaceConfig,
};
use log::info;

fn load_config() -> Result<WorkspaceConfig, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(WorkspaceConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|err| format!("failed to read config `{path}`: {err}"))?;
    WorkspaceConfig::from_json_str(&raw).map_err(|err| format!("invalid config `{path}`: {err}"))
}

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("DEVHUB_LOG_DIR") {
        if let Err(err) = init_logging(&LogSettings::with_default_level(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let workspace = Workspace::new(&config);
    let mut session = AppSession::init(Box::new(MemoryThemeStore::default()), false);
    session.login("demo@example.com", "demo");
    info!("event=cli_run module=cli status=ok");

    println!("devhub_core version={}", devhub_core::core_version());
    let summary = workspace.dashboard(session.user());
    println!("Welcome back, {}!", summary.greeting_name);
    println!(
        "snippets={} projects={} learning={} journal={}",
        summary.counts.snippets,
        summary.counts.projects,
        summary.counts.learning_topics,
        summary.counts.journal_entries
    );

    let board = workspace.projects().board();
    for status in ProjectStatus::ALL {
        let lane = board.lane(status);
        let titles: Vec<&str> = lane.cards.iter().map(|card| card.title.as_str()).collect();
        println!("[{}] {}", status.label(), titles.join(" | "));
    }

    if let Some(journal) = &summary.latest_journal {
        println!(
            "latest journal: {} - {}",
            journal.title,
            journal.preview.as_deref().unwrap_or("")
        );
    }
    ExitCode::SUCCESS
}

//! Entry point for the airdrop portal.
//!
//! This Dioxus desktop application shows the registration and claim screen
//! for the active airdrop window, backed by a JSON snapshot and a simulated
//! backend.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use airdrop_logging::{LogConfig, PortalSubscriberBuilder};
use airdrop_portal::backend::SimulatedBackend;
use airdrop_portal::clock;
use airdrop_portal::components::{App, LoadErrorScreen, LoadingScreen, SharedBackend};
use airdrop_portal::snapshot::{load_snapshot, SnapshotSource};
use airdrop_portal::state::PortalState;
use airdrop_ui::SHARED_CSS;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Settings the root component reads once it mounts.
#[derive(Debug, Clone, Default)]
struct PortalConfig {
    source: SnapshotSource,
    latency: Duration,
    fail_actions: bool,
}

static PORTAL_CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "airdrop-portal")]
#[command(about = "Airdrop registration and claim portal")]
struct Args {
    /// Path to a JSON snapshot (reads from stdin if not provided)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Simulated confirmation latency for each action, in milliseconds
    #[arg(long, default_value_t = 1500)]
    latency_ms: u64,

    /// Make every register, claim and stake action fail
    #[arg(long)]
    fail_actions: bool,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Human-readable console logs instead of JSONL
    #[arg(long)]
    pretty: bool,

    /// Write JSONL logs to this directory, rotated daily (console stays off unless --pretty)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Freeze the clock at an RFC 3339 instant, e.g. 2026-09-02T12:00:00Z
    #[arg(long)]
    now: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _log_guard = logging_builder(&args).init().context("failed to initialize logging")?;

    tracing::info!("Starting Airdrop Portal");

    if let Some(raw) = &args.now {
        let frozen = DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now value {raw:?}"))?
            .with_timezone(&Utc);
        tracing::info!(now = %frozen, "clock frozen");
        clock::set_frozen(Some(frozen));
    }

    PORTAL_CONFIG
        .set(PortalConfig {
            source: SnapshotSource { file_path: args.file },
            latency: Duration::from_millis(args.latency_ms),
            fail_actions: args.fail_actions,
        })
        .ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Airdrop Portal")
                        .with_inner_size(LogicalSize::new(1200, 900)),
                )
                .with_custom_head(format!("<style>{SHARED_CSS}\n{STYLES_CSS}</style>")),
        )
        .launch(RootApp);

    Ok(())
}

/// Picks the logging preset for the flags, then applies level and console overrides.
fn logging_builder(args: &Args) -> PortalSubscriberBuilder {
    let config = match (&args.log_dir, args.pretty) {
        (Some(directory), _) => LogConfig::production(directory.clone()),
        (None, true) => LogConfig::development(),
        (None, false) => LogConfig::default(),
    };
    PortalSubscriberBuilder::new()
        .with_config(config)
        .with_level(args.log_level.clone())
        .with_console(args.log_dir.is_none() || args.pretty)
        .with_pretty(args.pretty)
}

/// Loading progress of the snapshot.
#[derive(Debug, Clone, PartialEq)]
enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Root component: provides the backend and loads the snapshot.
#[component]
fn RootApp() -> Element {
    let config = PORTAL_CONFIG.get().cloned().unwrap_or_default();

    let backend = use_hook(|| {
        Rc::new(SimulatedBackend::new(config.latency).with_failures(config.fail_actions))
    });
    use_context_provider({
        let backend = backend.clone();
        move || -> SharedBackend { backend }
    });

    let state = use_signal(PortalState::default);
    let status = use_signal(|| LoadStatus::Loading);

    use_drop(|| {
        tracing::info!("Shutting down Airdrop Portal");
        clock::request_shutdown();
    });

    let _load_handle = use_resource(move || {
        let mut state = state;
        let mut status = status;
        let backend = backend.clone();
        let source = config.source.clone();

        async move {
            let loaded = load_snapshot(&source)
                .await
                .and_then(PortalState::from_snapshot);
            match loaded {
                Ok(portal) => {
                    backend.seed_registered(portal.registered_windows.iter().copied());
                    tracing::info!(
                        windows = portal.schedule.total_windows(),
                        registered = portal.registered_windows.len(),
                        "Portal ready"
                    );
                    state.set(portal);
                    status.set(LoadStatus::Ready);
                }
                Err(e) => {
                    tracing::error!(source = %source.describe(), error = %e, "Failed to load snapshot");
                    status.set(LoadStatus::Failed(e.to_string()));
                }
            }
        }
    });

    match status() {
        LoadStatus::Loading => rsx! { LoadingScreen {} },
        LoadStatus::Failed(message) => rsx! { LoadErrorScreen { message } },
        LoadStatus::Ready => rsx! { App { state } },
    }
}

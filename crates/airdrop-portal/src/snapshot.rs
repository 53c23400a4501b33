//! JSON snapshot loader for portal state.
//!
//! Supports reading from stdin or a file path.

use std::path::{Path, PathBuf};

use airdrop_core::{units::raw_amount, AirdropWindow, HistoryEvent, PortalError, StakeInfo, UiAlert};
use serde::Deserialize;
use tokio::io::AsyncReadExt;

/// Everything the portal needs to render the registration screen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortalSnapshot {
    #[serde(default)]
    pub windows: Vec<AirdropWindow>,
    #[serde(default)]
    pub stake_info: StakeInfo,
    /// Raw claimable reward for the active window.
    #[serde(default, deserialize_with = "raw_amount::deserialize")]
    pub rewards: u64,
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
    /// Window ids the account already registered for.
    #[serde(default)]
    pub registered_windows: Vec<u32>,
    #[serde(default)]
    pub ui_alert: UiAlert,
}

impl PortalSnapshot {
    pub fn from_json(text: &str) -> Result<Self, PortalError> {
        serde_json::from_str(text).map_err(|e| PortalError::Snapshot(e.to_string()))
    }
}

/// Where the snapshot is read from.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    /// Path to a JSON file, or None to read from stdin.
    pub file_path: Option<PathBuf>,
}

impl SnapshotSource {
    pub fn describe(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

/// Reads and parses the snapshot.
pub async fn load_snapshot(source: &SnapshotSource) -> Result<PortalSnapshot, PortalError> {
    let text = match &source.file_path {
        Some(path) => read_file(path).await?,
        None => {
            tracing::info!("Reading snapshot from stdin");
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| PortalError::Snapshot(format!("stdin: {e}")))?;
            text
        }
    };

    let snapshot = PortalSnapshot::from_json(&text)?;
    tracing::info!(
        source = %source.describe(),
        windows = snapshot.windows.len(),
        history = snapshot.history.len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

async fn read_file(path: &Path) -> Result<String, PortalError> {
    tracing::info!("Reading snapshot from file: {:?}", path);
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PortalError::Snapshot(format!("{}: {e}", path.display())))
}

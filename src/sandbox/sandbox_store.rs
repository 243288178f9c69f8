use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::sandbox::sandbox_errors::SandboxError;
use crate::sandbox::sandbox_model::{HypotheticalDeal, NewHypotheticalDeal, SandboxState};

/// Fixed key the sandbox payload lives under inside the storage file.
pub const SANDBOX_STORAGE_KEY: &str = "whatif-sandbox";

const SANDBOX_FILE_NAME: &str = "sandbox.json";

/// File-backed store for the what-if sandbox, the desktop analog of the
/// browser's local storage. A missing or unreadable file is treated as an
/// empty sandbox, never an error.
pub struct SandboxStore {
    path: PathBuf,
}

impl SandboxStore {
    pub fn new(app_data_dir: &str) -> Self {
        SandboxStore {
            path: Path::new(app_data_dir).join(SANDBOX_FILE_NAME),
        }
    }

    pub fn load(&self) -> SandboxState {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return SandboxState::default(),
        };

        let root: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!("Sandbox storage is corrupt, starting empty: {}", e);
                return SandboxState::default();
            }
        };

        root.get(SANDBOX_STORAGE_KEY)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    fn save(&self, state: &SandboxState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                Error::Sandbox(SandboxError::WriteFailed(e.to_string()))
            })?;
        }

        let mut root = serde_json::Map::new();
        root.insert(
            SANDBOX_STORAGE_KEY.to_string(),
            serde_json::to_value(state)?,
        );
        let payload = serde_json::to_string_pretty(&serde_json::Value::Object(root))?;

        fs::write(&self.path, payload)
            .map_err(|e| Error::Sandbox(SandboxError::WriteFailed(e.to_string())))?;
        Ok(())
    }

    pub fn add_deal(&self, new_deal: NewHypotheticalDeal) -> Result<SandboxState> {
        let mut state = self.load();
        state.deals.push(HypotheticalDeal {
            id: Uuid::new_v4().to_string(),
            label: new_deal.label,
            category: new_deal.category,
            amount: new_deal.amount,
            probability: new_deal.probability,
            expected_close_date: new_deal.expected_close_date,
        });
        self.save(&state)?;
        Ok(state)
    }

    pub fn remove_deal(&self, deal_id: &str) -> Result<SandboxState> {
        let mut state = self.load();
        let before = state.deals.len();
        state.deals.retain(|d| d.id != deal_id);
        if state.deals.len() == before {
            return Err(Error::Sandbox(SandboxError::DealNotFound(
                deal_id.to_string(),
            )));
        }
        self.save(&state)?;
        Ok(state)
    }

    pub fn set_active(&self, is_active: bool) -> Result<SandboxState> {
        let mut state = self.load();
        state.is_active = is_active;
        self.save(&state)?;
        Ok(state)
    }

    /// Resets the sandbox to `{deals: [], isActive: false}` and persists the
    /// empty state.
    pub fn clear(&self) -> Result<SandboxState> {
        let state = SandboxState::default();
        self.save(&state)?;
        Ok(state)
    }
}

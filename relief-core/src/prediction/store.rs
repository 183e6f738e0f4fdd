#[cfg(test)]
#[path = "../../tests/unit/prediction/store_test.rs"]
mod store_test;

use super::DelayModel;
use crate::utils::GenericResult;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persists and loads trained delay model parameters.
pub trait ModelStore {
    /// Loads a model. Returns `Ok(None)` when there is no stored model yet.
    fn load(&self) -> GenericResult<Option<DelayModel>>;

    /// Stores a model replacing the previous one.
    fn save(&self, model: &DelayModel) -> GenericResult<()>;
}

/// Keeps model as a json file on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a new instance of `JsonFileStore`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns a path to model file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl ModelStore for JsonFileStore {
    fn load(&self) -> GenericResult<Option<DelayModel>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)
            .map_err(|err| format!("cannot open model file '{}': '{err}'", self.path.display()))?;
        let model: DelayModel = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| format!("cannot deserialize model file '{}': '{err}'", self.path.display()))?;

        model.validate()?;

        Ok(Some(model))
    }

    fn save(&self, model: &DelayModel) -> GenericResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // write next to the target and rename, so readers never observe a partially written file
        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        let mut writer = BufWriter::new(File::create(&temp_path)?);
        serde_json::to_writer_pretty(&mut writer, model)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, &self.path)
            .map_err(|err| format!("cannot store model file '{}': '{err}'", self.path.display()).into())
    }
}

/// Keeps model in memory.
#[derive(Default)]
pub struct InMemoryStore {
    model: Mutex<Option<DelayModel>>,
}

impl InMemoryStore {
    /// Creates a new instance of `InMemoryStore` with given model.
    pub fn new(model: Option<DelayModel>) -> Self {
        Self { model: Mutex::new(model) }
    }
}

impl ModelStore for InMemoryStore {
    fn load(&self) -> GenericResult<Option<DelayModel>> {
        let model = self.model.lock().map_err(|err| format!("cannot access model: '{err}'"))?;

        Ok(model.clone())
    }

    fn save(&self, model: &DelayModel) -> GenericResult<()> {
        let mut stored = self.model.lock().map_err(|err| format!("cannot access model: '{err}'"))?;
        *stored = Some(model.clone());

        Ok(())
    }
}

use crate::core::error::PatchError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

pub trait Serializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>, serde_json::Error>;
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, serde_json::Error>;
}

/// JSON encoding, compact or 2-space pretty printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pub pretty: bool,
}

impl JsonSerializer {
    pub fn pretty() -> Self {
        JsonSerializer { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>, serde_json::Error> {
        if self.pretty {
            serde_json::to_vec_pretty(data)
        } else {
            serde_json::to_vec(data)
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

pub trait FileSerializer {
    fn save_to_file<T, S: Serializer>(
        &self,
        path: &Path,
        data: &T,
        serializer: &S,
    ) -> Result<(), PatchError>
    where
        T: Serialize;
    fn load_from_file<T, S: Serializer>(&self, path: &Path, serializer: &S) -> Result<T, PatchError>
    where
        T: DeserializeOwned;
}

pub struct FileUtils;

impl FileSerializer for FileUtils {
    fn save_to_file<T, S: Serializer>(
        &self,
        path: &Path,
        data: &T,
        serializer: &S,
    ) -> Result<(), PatchError>
    where
        T: Serialize,
    {
        let content = serializer.serialize(data)?;
        atomic_write(path, &content)
    }

    fn load_from_file<T, S: Serializer>(&self, path: &Path, serializer: &S) -> Result<T, PatchError>
    where
        T: DeserializeOwned,
    {
        let content = fs::read(path).map_err(|err| PatchError::io(path, err))?;
        serializer
            .deserialize(&content)
            .map_err(|source| PatchError::DecodeError {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Write through a sibling `.tmp` file so readers never observe a partial file.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), PatchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| PatchError::io(parent, err))?;
        }
    }
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, data).map_err(|err| PatchError::io(&tmp_path, err))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(PatchError::io(path, err));
    }
    Ok(())
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

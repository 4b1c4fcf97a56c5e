// File backed implementation of the KeyValueStore port.
//
// Layout
// - One file per key inside `dir`. File names keep [A-Za-z0-9-] and spell every other byte of
//   the key as `_XX` (upper-case hex), so distinct keys never share a file.
// - Writes go to a sibling `.tmp` file, are synced to disk, and only then renamed into place.
//   A failed write removes the `.tmp` file again.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(file_name_for(key))
    }

    // Makes the rename itself durable. The new content is already synced at this point.
    async fn sync_dir(&self) {
        #[cfg(unix)]
        {
            let synced = match fs::File::open(&self.dir).await {
                Ok(dir) => dir.sync_all().await,
                Err(e) => Err(e),
            };
            if let Err(error) = synced {
                tracing::warn!(%error, dir = %self.dir.display(), "could not sync store directory");
            }
        }
    }
}

fn file_name_for(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(char::from(byte));
        } else {
            let _ = write!(name, "_{byte:02X}");
        }
    }
    name
}

async fn write_synced(path: &Path, value: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(value).await?;
    file.sync_all().await
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &[u8]) -> Result<(), KeyValueStoreError> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");

        let written = match write_synced(&tmp, value).await {
            Ok(()) => fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(error) = written {
            if let Err(cleanup) = fs::remove_file(&tmp).await
                && cleanup.kind() != ErrorKind::NotFound
            {
                tracing::warn!(error = %cleanup, path = %tmp.display(), "could not remove temp file");
            }
            return Err(error.into());
        }

        self.sync_dir().await;
        tracing::trace!(path = %path.display(), bytes = value.len(), "stored item");
        Ok(())
    }
}

use anyhow::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, BufWriter};
use uuid::Uuid;

/// An order file persisted to local storage, ready for job submission.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub path: PathBuf,
    pub original_filename: String,
    pub size: u64,
    pub sha256: String,
}

/// Persists uploaded order files under a configured directory.
pub struct UploadStore {
    upload_dir: PathBuf,
}

impl UploadStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.upload_dir).await?;
        Ok(())
    }

    /// Streams an upload to disk while calculating its SHA256 hash on the
    /// fly. Files are stored as `<uuid>_<sanitized name>` so repeated
    /// uploads of the same order never collide.
    pub async fn store_stream<R>(&self, filename: &str, mut reader: R) -> Result<StoredUpload>
    where
        R: AsyncRead + Unpin + Send,
    {
        let stored_name = format!("{}_{}", Uuid::new_v4(), filename);
        let path = self.upload_dir.join(stored_name);

        let file = fs::File::create(&path).await?;
        let mut writer = BufWriter::new(file);
        let mut hasher = Sha256::new();
        let mut total_size: u64 = 0;
        let mut buffer = vec![0u8; 64 * 1024];

        loop {
            let n = reader.read(&mut buffer).await?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
            writer.write_all(&buffer[..n]).await?;
            total_size += n as u64;
        }

        writer.flush().await?;

        Ok(StoredUpload {
            path,
            original_filename: filename.to_string(),
            size: total_size,
            sha256: hex::encode(hasher.finalize()),
        })
    }
}

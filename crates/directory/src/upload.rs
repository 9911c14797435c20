//! Bounded streaming upload storage.
//!
//! Streams an incoming byte source to disk in fixed-size chunks while
//! holding a running total against a hard byte ceiling. The contract that
//! matters: no partial file survives a failed store, whether the failure
//! is the ceiling or an I/O error mid-stream. Cleanup lives in one place
//! (the wrapper around [`write_bounded`]) rather than on each exit path.
//!
//! Content and type are never inspected; any byte stream up to the
//! ceiling is accepted.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

/// Default hard ceiling for a single upload, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 1_000_000;

/// Fixed read size for the streaming loop.
const CHUNK_SIZE: usize = 1024;

/// Errors that can occur while storing an upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The stream exceeded the byte ceiling.
    #[error("file too large, max size is {limit} bytes")]
    TooLarge {
        /// The ceiling that was exceeded.
        limit: u64,
    },

    /// The filesystem or the incoming stream failed.
    #[error("upload I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stores uploaded byte streams under a directory, bounded by a ceiling.
#[derive(Debug, Clone)]
pub struct UploadGuard {
    dir: PathBuf,
    max_bytes: u64,
}

impl UploadGuard {
    /// Create a guard storing files under `dir` with the default ceiling.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_ceiling(dir, DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Create a guard with an explicit byte ceiling.
    pub fn with_ceiling(dir: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    /// The configured byte ceiling.
    #[must_use]
    pub const fn ceiling(&self) -> u64 {
        self.max_bytes
    }

    /// Stream `reader` to `<dir>/<filename>`, creating the directory if
    /// absent.
    ///
    /// Returns the final path on success. On any failure the
    /// partially-written file is deleted before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::TooLarge`] when the running total exceeds
    /// the ceiling, [`UploadError::Io`] for filesystem or stream failures.
    pub async fn store<R>(&self, filename: &str, reader: R) -> Result<PathBuf, UploadError>
    where
        R: AsyncRead + Unpin,
    {
        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);

        match write_bounded(&path, reader, self.max_bytes).await {
            Ok(written) => {
                tracing::debug!(path = %path.display(), bytes = written, "upload stored");
                Ok(path)
            }
            Err(err) => {
                // The output handle is already dropped here; remove
                // whatever made it to disk. A missing file just means the
                // failure happened before the first write.
                if let Err(cleanup) = fs::remove_file(&path).await
                    && cleanup.kind() != std::io::ErrorKind::NotFound
                {
                    tracing::error!(
                        path = %path.display(),
                        error = %cleanup,
                        "failed to remove partial upload"
                    );
                }
                if let UploadError::TooLarge { limit } = err {
                    tracing::warn!(path = %path.display(), limit, "upload rejected: too large");
                }
                Err(err)
            }
        }
    }
}

/// Copy `reader` into a fresh file at `path`, failing once the running
/// total exceeds `max_bytes`. The ceiling is checked before each chunk is
/// written, so the over-limit chunk never reaches disk. Returns the byte
/// count on success.
async fn write_bounded<R>(path: &Path, mut reader: R, max_bytes: u64) -> Result<u64, UploadError>
where
    R: AsyncRead + Unpin,
{
    let mut out = fs::File::create(path).await?;
    let mut chunk = [0_u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        total += n as u64;
        if total > max_bytes {
            return Err(UploadError::TooLarge { limit: max_bytes });
        }
        out.write_all(chunk.get(..n).unwrap_or_default()).await?;
    }

    out.flush().await?;
    Ok(total)
}

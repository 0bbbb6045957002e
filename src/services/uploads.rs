use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Writes uploaded images under the public site root. Files are never
/// removed, not even when the row referencing them is deleted.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    url_prefix: String,
}

impl UploadStore {
    pub fn new(site_root: &Path, upload_dir: &str) -> Self {
        let upload_dir = upload_dir.trim_matches('/');
        Self {
            dir: site_root.join(upload_dir),
            url_prefix: format!("/{}", upload_dir.replace('\\', "/")),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `data` and returns its root-relative URL.
    pub fn save(&self, original_name: &str, data: &[u8]) -> Result<String> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating upload directory {}", self.dir.display()))?;

        let filename = format!("{}_{}", next_stamp(), sanitize_file_name(original_name));
        let file_path = self.dir.join(&filename);
        std::fs::write(&file_path, data)
            .with_context(|| format!("writing upload {}", file_path.display()))?;

        Ok(format!("{}/{}", self.url_prefix, filename))
    }
}

/// Nanosecond wall-clock stamp, bumped so that no two calls in this process
/// return the same value.
fn next_stamp() -> i64 {
    let now = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let previous = LAST_STAMP
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    now.max(previous + 1)
}

fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        "upload".to_string()
    } else {
        base.to_string()
    }
}

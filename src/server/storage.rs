//! Filesystem storage for student images.
//!
//! All filesystem access for images goes through [`ImageStorage`]. Files live
//! flat inside a single root directory and are addressed by absolute path, which
//! is what gets recorded on the student. The storage also hands out per-student
//! locks so that the check/delete/write/record sequence of an image change runs
//! exclusively for a given student.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex as SyncMutex, PoisonError},
};

use tokio::{
    fs,
    io::AsyncWriteExt,
    sync::{Mutex, OwnedMutexGuard},
};

type LockMap = Arc<SyncMutex<HashMap<i32, Arc<Mutex<()>>>>>;

/// Suffix of the temporary sibling a new image is written to before the rename.
const PARTIAL_SUFFIX: &str = ".part";

#[derive(Clone)]
pub struct ImageStorage {
    root: PathBuf,
    locks: LockMap,
}

impl ImageStorage {
    /// Opens the storage rooted at `root`, creating the directory if missing.
    ///
    /// The root is canonicalized so every path handed out is absolute.
    pub async fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        let root = fs::canonicalize(&root).await?;

        Ok(Self {
            root,
            locks: Arc::new(SyncMutex::new(HashMap::new())),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the absolute path for `file_name` inside the storage root.
    ///
    /// Returns `None` when the name is empty or is not a plain file name
    /// (contains separators, `..`, etc.).
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let name = Path::new(file_name).file_name()?;
        if name != std::ffi::OsStr::new(file_name) {
            return None;
        }

        Some(self.root.join(name))
    }

    pub async fn exists(&self, path: impl AsRef<Path>) -> io::Result<bool> {
        fs::try_exists(path).await
    }

    /// Writes `data` to `path`, replacing any existing file.
    ///
    /// The content is written to a temporary sibling first and renamed into
    /// place. The storage root is recreated if it disappeared.
    pub async fn store(&self, path: impl AsRef<Path>, data: &[u8]) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut partial = path.as_os_str().to_owned();
        partial.push(PARTIAL_SUFFIX);
        let partial = PathBuf::from(partial);

        let write_res: io::Result<()> = async {
            let mut file = fs::File::create(&partial).await?;
            file.write_all(data).await?;
            file.flush().await?;
            file.sync_all().await?;
            Ok(())
        }
        .await;

        let result = match write_res {
            Ok(()) => fs::rename(&partial, path).await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            if let Err(cleanup) = fs::remove_file(&partial).await {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        "Failed to clean up partial image {}: {}",
                        partial.display(),
                        cleanup
                    );
                }
            }
            return Err(err);
        }

        Ok(())
    }

    pub async fn remove(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        fs::remove_file(path).await.inspect_err(|e| {
            tracing::error!("Failed to remove file {}: {}", path.display(), e);
        })
    }

    /// Acquires the image lock for a student.
    ///
    /// Held for the duration of an image change; other changes for the same
    /// student wait, changes for other students proceed. The entry for the
    /// student is dropped from the lock table once nobody holds or waits on it.
    pub async fn lock(&self, student_id: i32) -> ImageLock {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(student_id).or_default().clone()
        };

        // Constructed before waiting so a cancelled wait still prunes the entry
        let mut held = ImageLock {
            guard: None,
            student_id,
            locks: self.locks.clone(),
        };
        held.guard = Some(lock.lock_owned().await);

        held
    }
}

/// Exclusive image lock for one student, released on drop.
pub struct ImageLock {
    guard: Option<OwnedMutexGuard<()>>,
    student_id: i32,
    locks: LockMap,
}

impl Drop for ImageLock {
    fn drop(&mut self) {
        // Release first so the table holds the only remaining reference when idle
        drop(self.guard.take());

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if locks
            .get(&self.student_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.student_id);
        }
    }
}

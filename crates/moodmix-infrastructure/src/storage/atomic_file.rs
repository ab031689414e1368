//! Crash-safe single-document files.
//!
//! Writes go to a hidden sibling (`.<name>.tmp`), are fsynced, then renamed
//! over the target. Read-modify-write cycles take an exclusive `fs2` lock on
//! a `<name>.lock` sibling so two processes cannot interleave updates.

use moodmix_core::MoodError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as _;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn name(self) -> &'static str {
        match self {
            FileFormat::Toml => "TOML",
            FileFormat::Json => "JSON",
        }
    }
}

#[derive(Debug)]
pub enum AtomicFileError {
    Io(std::io::Error),
    /// The document could not be encoded or decoded.
    Format { format: FileFormat, message: String },
    Lock(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::Format { format, message } => {
                write!(f, "{} format error: {}", format.name(), message)
            }
            AtomicFileError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::Io(e)
    }
}

impl From<AtomicFileError> for MoodError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::Io(io) => MoodError::from(io),
            AtomicFileError::Format { format, message } => MoodError::Serialization {
                format: format.name().to_string(),
                message,
            },
            AtomicFileError::Lock(message) => MoodError::io(message),
        }
    }
}

/// Handle to one document stored at `path`.
pub struct AtomicFile<T> {
    path: PathBuf,
    format: FileFormat,
    _phantom: PhantomData<T>,
}

impl<T> AtomicFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf, format: FileFormat) -> Self {
        Self {
            path,
            format,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: the document was read
    /// - `Ok(None)`: the file is missing or blank
    /// - `Err`: the file could not be read or decoded
    pub fn load(&self) -> Result<Option<T>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        self.decode(&content).map(Some)
    }

    /// Replaces the document in one rename.
    pub fn save(&self, data: &T) -> Result<(), AtomicFileError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let encoded = self.encode(data)?;

        let tmp_path = self.sibling(|name| format!(".{}.tmp", name))?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(encoded.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Loads the document (or `default_value`), lets `f` modify it and saves
    /// it back, all under the exclusive lock.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicFileError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicFileError>,
    {
        let _lock = FileLock::acquire(&self.sibling(|name| format!("{}.lock", name))?)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }

    fn encode(&self, data: &T) -> Result<String, AtomicFileError> {
        let encoded = match self.format {
            FileFormat::Toml => toml::to_string_pretty(data).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::to_string_pretty(data).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| AtomicFileError::Format {
            format: self.format,
            message,
        })
    }

    fn decode(&self, content: &str) -> Result<T, AtomicFileError> {
        let decoded = match self.format {
            FileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        decoded.map_err(|message| AtomicFileError::Format {
            format: self.format,
            message,
        })
    }

    fn sibling(&self, name: impl FnOnce(&str) -> String) -> Result<PathBuf, AtomicFileError> {
        let invalid = |what: &str| {
            AtomicFileError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no {}", self.path.display(), what),
            ))
        };
        let parent = self.path.parent().ok_or_else(|| invalid("parent directory"))?;
        let file_name = self.path.file_name().ok_or_else(|| invalid("file name"))?;
        Ok(parent.join(name(&file_name.to_string_lossy())))
    }
}

/// Exclusive lock held until drop.
struct FileLock {
    _file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(lock_path: &Path) -> Result<Self, AtomicFileError> {
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)?;

        use fs2::FileExt;
        file.lock_exclusive()
            .map_err(|e| AtomicFileError::Lock(format!("{}: {}", lock_path.display(), e)))?;

        Ok(FileLock {
            _file: file,
            lock_path: lock_path.to_path_buf(),
        })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Shelf {
        label: String,
        bottles: u32,
    }

    fn shelf(bottles: u32) -> Shelf {
        Shelf {
            label: "bar".to_string(),
            bottles,
        }
    }

    #[test]
    fn test_round_trip_in_both_formats() {
        let temp_dir = TempDir::new().unwrap();
        for (name, format) in [("shelf.toml", FileFormat::Toml), ("shelf.json", FileFormat::Json)] {
            let file = AtomicFile::<Shelf>::new(temp_dir.path().join(name), format);
            file.save(&shelf(3)).unwrap();
            assert_eq!(file.load().unwrap(), Some(shelf(3)));
        }
    }

    #[test]
    fn test_missing_and_blank_files_load_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.json");
        let file = AtomicFile::<Shelf>::new(path.clone(), FileFormat::Json);
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_reports_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AtomicFile::<Shelf>::new(path, FileFormat::Json).load().unwrap_err();
        assert!(matches!(err, AtomicFileError::Format { format: FileFormat::Json, .. }));
        assert!(MoodError::from(err).is_serialization());
    }

    #[test]
    fn test_update_applies_on_top_of_default_then_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::<Shelf>::new(temp_dir.path().join("shelf.toml"), FileFormat::Toml);

        file.update(shelf(0), |s| {
            s.bottles += 2;
            Ok(())
        })
        .unwrap();
        file.update(shelf(0), |s| {
            s.bottles += 5;
            Ok(())
        })
        .unwrap();

        assert_eq!(file.load().unwrap().unwrap().bottles, 7);
        assert!(!temp_dir.path().join("shelf.toml.lock").exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file_and_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("shelf.json");
        let file = AtomicFile::<Shelf>::new(path.clone(), FileFormat::Json);

        file.save(&shelf(1)).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("nested").join(".shelf.json.tmp").exists());
    }
}

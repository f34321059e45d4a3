//! JSON-file submission store
//!
//! The whole data file is held in memory and rewritten on every append.
//! Writes go to a sibling temp file which is fsynced and then renamed over
//! the data file, so a crash leaves either the old or the new document.
//!
//! The store is a plain owned value; callers that share it across tasks
//! wrap it in a mutex.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::schema::{FormSchema, Payload};

use super::errors::{StorageError, StorageResult};
use super::query::{paginate, PageRequest, SubmissionPage};
use super::record::{DataFile, SubmissionRecord};

/// Append-only store of accepted submissions
#[derive(Debug)]
pub struct SubmissionStore {
    path: PathBuf,
    data: DataFile,
}

impl SubmissionStore {
    /// Opens the data file at `path`, creating it if missing.
    ///
    /// A file without a schema snapshot gets `schema` recorded in it.
    pub fn open(path: impl AsRef<Path>, schema: &FormSchema) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let (data, dirty) = if path.exists() {
            let mut data = Self::read_data_file(&path)?;
            let dirty = data.schema.is_none();
            if dirty {
                data.schema = Some(schema.clone());
            }
            (data, dirty)
        } else {
            let data = DataFile {
                submissions: Vec::new(),
                schema: Some(schema.clone()),
            };
            (data, true)
        };

        let store = Self { path, data };
        if dirty {
            store.persist()?;
        }

        Ok(store)
    }

    fn read_data_file(path: &Path) -> StorageResult<DataFile> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| StorageError::io(&display, e))?;

        if content.trim().is_empty() {
            return Ok(DataFile::default());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::corrupt(&display, e.to_string()))
    }

    /// Returns the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored submissions
    pub fn len(&self) -> usize {
        self.data.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.submissions.is_empty()
    }

    /// All submissions, newest first
    pub fn all(&self) -> &[SubmissionRecord] {
        &self.data.submissions
    }

    /// Schema recorded in the data file
    pub fn schema_snapshot(&self) -> Option<&FormSchema> {
        self.data.schema.as_ref()
    }

    /// Stores an accepted payload and returns its record.
    ///
    /// The caller is responsible for having validated `data`. On a failed
    /// write the in-memory state is rolled back.
    pub fn append(&mut self, data: Payload) -> StorageResult<SubmissionRecord> {
        let record = SubmissionRecord::new(data);
        self.data.submissions.insert(0, record.clone());

        if let Err(e) = self.persist() {
            self.data.submissions.remove(0);
            return Err(e);
        }

        Ok(record)
    }

    /// Returns one sorted page of submissions
    pub fn list(&self, request: &PageRequest) -> SubmissionPage {
        paginate(&self.data.submissions, request)
    }

    fn persist(&self) -> StorageResult<()> {
        let display = self.path.display().to_string();
        let json = serde_json::to_string_pretty(&self.data)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent.display().to_string(), e))?;
        }

        let tmp_path = self.tmp_path();
        let tmp_display = tmp_path.display().to_string();

        let mut file = File::create(&tmp_path).map_err(|e| StorageError::io(&tmp_display, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| StorageError::io(&tmp_display, e))?;
        file.sync_all().map_err(|e| StorageError::io(&tmp_display, e))?;

        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::io(&display, e))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

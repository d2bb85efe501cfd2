use crate::config::local::LocalFileStore;
use crate::core::lines::{insert_at, split_lines};
use crate::core::{ConfigProvider, FileStore};
use crate::domain::model::{
    ErrorPolicy, FileFailure, FileOutcome, InsertConfig, RunReport, INSERT_POSITION,
};
use crate::utils::error::{InsertError, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Inserts one line after the first line of every matching file in a
/// directory.
pub struct LinePrepender<S: FileStore> {
    store: S,
    config: InsertConfig,
    policy: ErrorPolicy,
    dry_run: bool,
}

impl<S: FileStore> LinePrepender<S> {
    pub fn new<C: ConfigProvider>(store: S, config: &C) -> Self {
        Self {
            store,
            config: config.to_insert_config(),
            policy: config.error_policy(),
            dry_run: config.dry_run(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &InsertConfig {
        &self.config
    }

    fn is_candidate(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(self.config.suffix.as_str()))
            .unwrap_or(false)
    }

    /// Entries directly inside the base directory whose name ends with the
    /// suffix, sorted by path. Directories are not filtered out.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let mut candidates: Vec<PathBuf> = self
            .store
            .list_entries(&self.config.base_directory)?
            .into_iter()
            .filter(|path| self.is_candidate(path))
            .collect();
        candidates.sort();

        tracing::debug!(
            "Found {} candidate(s) ending in '{}' in {}",
            candidates.len(),
            self.config.suffix,
            self.config.base_directory.display()
        );
        Ok(candidates)
    }

    /// One read-modify-write cycle. Nothing is written in dry-run mode.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let content = self.store.read_to_string(path)?;
        let original_lines = split_lines(&content).len();

        let updated = insert_at(&content, INSERT_POSITION, &self.config.inserted_line)
            .ok_or_else(|| InsertError::EmptyFile {
                path: path.to_path_buf(),
            })?;

        if self.dry_run {
            tracing::info!("🔍 Would insert line into {}", path.display());
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                original_lines,
                written: false,
            });
        }

        self.store.write(path, &updated)?;
        tracing::info!("✏️ Inserted line into {} ({} lines before)", path.display(), original_lines);

        Ok(FileOutcome {
            path: path.to_path_buf(),
            original_lines,
            written: true,
        })
    }

    /// One independent result per candidate, produced lazily in candidate
    /// order. Listing the directory happens up front and fails as a whole.
    pub fn results(
        &self,
    ) -> Result<impl ExactSizeIterator<Item = (PathBuf, Result<FileOutcome>)> + '_> {
        let candidates = self.candidates()?;
        Ok(candidates.into_iter().map(move |path| {
            let result = self.process_file(&path);
            (path, result)
        }))
    }

    /// Processes every candidate under the configured error policy.
    ///
    /// With [`ErrorPolicy::Abort`] the first failure is returned as-is and
    /// later candidates are never opened. Files handled before it stay
    /// modified.
    pub fn run(&self) -> Result<RunReport> {
        match self.run_with_report() {
            (_, Some(e)) => Err(e),
            (report, None) => Ok(report),
        }
    }

    /// Same as [`run`](Self::run), but the report is returned even when the
    /// run stops early, so callers can tell which files were already
    /// rewritten. A failed directory listing yields an empty, aborted report.
    pub fn run_with_report(&self) -> (RunReport, Option<InsertError>) {
        let started_at = Utc::now();
        let mut report = RunReport {
            directory: self.config.base_directory.clone(),
            suffix: self.config.suffix.clone(),
            candidates: 0,
            modified: Vec::new(),
            failed: Vec::new(),
            dry_run: self.dry_run,
            aborted: false,
            started_at,
            finished_at: started_at,
        };

        let results = match self.results() {
            Ok(results) => results,
            Err(e) => {
                report.aborted = true;
                report.finished_at = Utc::now();
                return (report, Some(e));
            }
        };
        report.candidates = results.len();

        let mut error = None;
        for (path, result) in results {
            let e = match result {
                Ok(outcome) => {
                    report.modified.push(outcome);
                    continue;
                }
                Err(e) => e,
            };

            report.failed.push(FileFailure {
                path: path.clone(),
                kind: format!("{:?}", e.category()),
                message: e.to_string(),
            });

            match self.policy {
                ErrorPolicy::Abort => {
                    if !report.modified.is_empty() && !self.dry_run {
                        tracing::warn!(
                            "Stopping after {} modified file(s); they are not rolled back",
                            report.modified.len()
                        );
                    }
                    report.aborted = true;
                    error = Some(e);
                    break;
                }
                ErrorPolicy::Continue => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        report.finished_at = Utc::now();
        (report, error)
    }
}

/// Rewrites every file directly under `base_directory` whose name ends with
/// `suffix`, inserting `inserted_line` as its second line. Stops at the
/// first error.
pub fn run(base_directory: impl AsRef<Path>, suffix: &str, inserted_line: &str) -> Result<()> {
    let config = InsertConfig::new(base_directory.as_ref(), suffix, inserted_line);
    LinePrepender::new(LocalFileStore::new(), &config).run()?;
    Ok(())
}

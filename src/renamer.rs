use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::classifier::{Classified, SeasonLabel, classify_episode, classify_season};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub files_renamed: usize,
    pub dirs_renamed: usize,
    pub dirs_skipped: usize,
}

/// Walks a directory tree and applies the season/episode normalization.
///
/// Directories are processed children-first so that a directory's own rename
/// never invalidates a path still needed to address its contents. Every path
/// handed to the rename syscalls is a value snapshotted before any mutation in
/// its scope.
#[derive(Debug)]
pub struct TreeRenamer {
    root: PathBuf,
    in_place: bool,
}

impl TreeRenamer {
    pub fn new<P: AsRef<Path>>(root: P, in_place: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            in_place,
        }
    }

    /// Runs one pass over the tree. Classification failures are per-name and
    /// skipped; a failed rename syscall aborts the whole run.
    pub fn run(&self) -> Result<RenameStats> {
        let mut stats = RenameStats::default();
        for dir in self.collect_dirs() {
            self.process_dir(&dir, &mut stats)?;
        }
        Ok(stats)
    }

    /// Snapshots the directory set up front, children before parents.
    fn collect_dirs(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .contents_first(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .collect()
    }

    fn process_dir(&self, dir: &Path, stats: &mut RenameStats) -> Result<()> {
        let Some(name) = dir.file_name() else {
            // A root like `/` or `.` has no name to classify.
            return Ok(());
        };
        let name = name.to_string_lossy();

        let season = match classify_season(&name) {
            Classified::Matched(season) => season,
            Classified::NoMatch => {
                debug!(dir = %dir.display(), "no season token, leaving directory as-is");
                stats.dirs_skipped += 1;
                return Ok(());
            }
            Classified::ExtractFailed { matched, error } => {
                eprintln!("Error: Cannot extract integer from '{matched}'. {error}");
                stats.dirs_skipped += 1;
                return Ok(());
            }
        };

        self.rename_episodes(dir, &season, stats)?;
        self.rename_dir(dir, &season, stats)
    }

    /// Renames every matching regular file directly inside `dir`.
    /// Subdirectories are handled by their own traversal visit.
    fn rename_episodes(
        &self,
        dir: &Path,
        season: &SeasonLabel,
        stats: &mut RenameStats,
    ) -> Result<()> {
        let entries =
            fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %dir.display(), "skipping unreadable entry: {err}");
                    continue;
                }
            };
            let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            let new_name = match classify_episode(&file_name, season.number) {
                Classified::Matched(new_name) => new_name,
                Classified::NoMatch => {
                    debug!(file = %file_name, "no episode token, leaving file as-is");
                    continue;
                }
                Classified::ExtractFailed { matched, error } => {
                    eprintln!("Error: Cannot extract integer from '{matched}'. {error}");
                    continue;
                }
            };
            if new_name == file_name {
                debug!(file = %file_name, "already normalized");
                continue;
            }

            let old_path = dir.join(&file_name);
            let new_path = dir.join(&new_name);
            fs::rename(&old_path, &new_path).with_context(|| {
                format!("renaming {} -> {}", old_path.display(), new_path.display())
            })?;
            println!("Renamed: {} -> {}", old_path.display(), new_path.display());
            stats.files_renamed += 1;
        }
        Ok(())
    }

    fn rename_dir(&self, dir: &Path, season: &SeasonLabel, stats: &mut RenameStats) -> Result<()> {
        let target = self.dir_target(dir, season);
        if target == dir {
            debug!(dir = %dir.display(), "already normalized");
            return Ok(());
        }

        fs::rename(dir, &target)
            .with_context(|| format!("renaming {} -> {}", dir.display(), target.display()))?;
        println!("Renamed: {} -> {}", dir.display(), target.display());
        stats.dirs_renamed += 1;
        Ok(())
    }

    /// A matched root renames next to itself; matched subdirectories flatten
    /// into the root unless in-place anchoring was requested.
    fn dir_target(&self, dir: &Path, season: &SeasonLabel) -> PathBuf {
        let anchor = if dir == self.root {
            self.root.parent()
        } else if self.in_place {
            dir.parent()
        } else {
            return self.root.join(&season.label);
        };
        match anchor {
            Some(parent) => parent.join(&season.label),
            None => PathBuf::from(&season.label),
        }
    }
}

//! File watching for template hot-reload.

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::templates::TemplateStore;
use crate::{Error, Result};

/// Event indicating a template document changed.
#[derive(Debug, Clone)]
pub struct TemplateChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was modified or recreated.
    Modified,
    /// File was removed.
    Removed,
}

/// Watches template documents and reloads a store when they change.
///
/// Reloading is always explicit: nothing happens until the event loop calls
/// [`poll`](Self::poll) and hands the result to
/// [`apply_changes`](Self::apply_changes).
///
/// # Example
///
/// ```ignore
/// let mut store = TemplateStore::discover()?;
/// let mut watcher = TemplateWatcher::new()?;
/// watcher.watch_store(&store)?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// if !changes.is_empty() {
///     watcher.apply_changes(&mut store, &changes)?;
/// }
/// ```
pub struct TemplateWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched_paths: HashSet<PathBuf>,
}

impl TemplateWatcher {
    /// Debounce window for file events.
    pub const DEBOUNCE: Duration = Duration::from_millis(100);

    /// Create a new template watcher.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer =
            new_debouncer(Self::DEBOUNCE, tx).map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched_paths: HashSet::new(),
        })
    }

    /// Start watching a template document.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(path.as_ref(), e))?;

        if !self.watched_paths.contains(&path) {
            self.debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            tracing::info!(target: "dixt_style::hot_reload", path = %path.display(), "watching template document");
            self.watched_paths.insert(path);
        }

        Ok(())
    }

    /// Watch every file the store was loaded from.
    ///
    /// Inline and built-in sources have no file and are skipped.
    pub fn watch_store(&mut self, store: &TemplateStore) -> Result<()> {
        let Some(sources) = store.sources() else {
            return Ok(());
        };
        for path in sources.paths() {
            self.watch(path)?;
        }
        Ok(())
    }

    /// Stop watching a template document.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let Ok(path) = path.as_ref().canonicalize() else {
            return Ok(());
        };

        if self.watched_paths.remove(&path) {
            let _ = self.debouncer.watcher().unwatch(&path);
            tracing::info!(target: "dixt_style::hot_reload", path = %path.display(), "stopped watching template document");
        }

        Ok(())
    }

    /// Poll for template changes.
    ///
    /// Returns at most one event per changed file. Call this in your event
    /// loop.
    pub fn poll(&mut self) -> Vec<TemplateChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind != DebouncedEventKind::Any
                            || !self.watched_paths.contains(&event.path)
                        {
                            continue;
                        }
                        let kind = if event.path.exists() {
                            ChangeKind::Modified
                        } else {
                            ChangeKind::Removed
                        };
                        changes.push(TemplateChangeEvent {
                            path: event.path,
                            kind,
                        });
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!(target: "dixt_style::hot_reload", error = %e, "file watcher error");
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!(target: "dixt_style::hot_reload", "file watcher disconnected");
                    break;
                }
            }
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Reload `store` if any change warrants it.
    ///
    /// Removed documents leave the store as it is. A modified document that
    /// fails to load is reported; the store keeps its previous templates.
    pub fn apply_changes(
        &self,
        store: &mut TemplateStore,
        changes: &[TemplateChangeEvent],
    ) -> Result<()> {
        let mut modified = false;
        for change in changes {
            match change.kind {
                ChangeKind::Modified => modified = true,
                ChangeKind::Removed => {
                    tracing::warn!(
                        target: "dixt_style::hot_reload",
                        path = %change.path.display(),
                        "template document removed, keeping loaded templates"
                    );
                }
            }
        }

        if !modified {
            return Ok(());
        }

        store.reload().map_err(|e| {
            tracing::error!(target: "dixt_style::hot_reload", error = %e, "failed to reload templates");
            Error::from(e)
        })
    }

    /// Get the number of watched files.
    pub fn watched_count(&self) -> usize {
        self.watched_paths.len()
    }

    /// Get the watched paths.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.watched_paths.iter().map(|p| p.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    use crate::templates::TemplatePaths;

    fn write_theme(dir: &Path, height: u32) -> TemplatePaths {
        let paths = TemplatePaths::in_dir(dir);
        fs::write(
            &paths.buttons,
            format!(r#"{{"SIZES": {{"default": {{"height": {height}}}}}}}"#),
        )
        .unwrap();
        fs::write(&paths.spinners, r#"{"classic": ["|", "/"]}"#).unwrap();
        paths
    }

    #[test]
    fn watch_store_files() {
        let dir = tempdir().unwrap();
        let paths = write_theme(dir.path(), 32);
        let store = TemplateStore::from_sources(paths.into_sources()).unwrap();

        let mut watcher = TemplateWatcher::new().unwrap();
        watcher.watch_store(&store).unwrap();
        assert_eq!(watcher.watched_count(), 2);
    }

    #[test]
    fn builtin_store_has_nothing_to_watch() {
        let store = TemplateStore::builtin().unwrap();
        let mut watcher = TemplateWatcher::new().unwrap();
        watcher.watch_store(&store).unwrap();
        assert_eq!(watcher.watched_count(), 0);
    }

    #[test]
    fn unwatch_file() {
        let dir = tempdir().unwrap();
        let paths = write_theme(dir.path(), 32);

        let mut watcher = TemplateWatcher::new().unwrap();
        watcher.watch(&paths.buttons).unwrap();
        watcher.watch(&paths.buttons).unwrap();
        assert_eq!(watcher.watched_count(), 1);

        watcher.unwatch(&paths.buttons).unwrap();
        assert_eq!(watcher.watched_count(), 0);
    }

    #[test]
    fn apply_modified_reloads_store() {
        let dir = tempdir().unwrap();
        let paths = write_theme(dir.path(), 32);
        let mut store = TemplateStore::from_sources(paths.clone().into_sources()).unwrap();

        write_theme(dir.path(), 48);
        let watcher = TemplateWatcher::new().unwrap();
        let changes = [TemplateChangeEvent {
            path: paths.buttons.clone(),
            kind: ChangeKind::Modified,
        }];
        watcher.apply_changes(&mut store, &changes).unwrap();
        assert_eq!(store.lookup_size("default").height, Some(48));
    }

    #[test]
    fn apply_broken_document_keeps_store() {
        let dir = tempdir().unwrap();
        let paths = write_theme(dir.path(), 32);
        let mut store = TemplateStore::from_sources(paths.clone().into_sources()).unwrap();

        fs::write(&paths.buttons, "{").unwrap();
        let watcher = TemplateWatcher::new().unwrap();
        let changes = [TemplateChangeEvent {
            path: paths.buttons.clone(),
            kind: ChangeKind::Modified,
        }];
        assert!(watcher.apply_changes(&mut store, &changes).is_err());
        assert_eq!(store.lookup_size("default").height, Some(32));
    }

    #[test]
    fn apply_removed_keeps_store() {
        let dir = tempdir().unwrap();
        let paths = write_theme(dir.path(), 32);
        let mut store = TemplateStore::from_sources(paths.clone().into_sources()).unwrap();

        fs::remove_file(&paths.buttons).unwrap();
        let watcher = TemplateWatcher::new().unwrap();
        let changes = [TemplateChangeEvent {
            path: paths.buttons.clone(),
            kind: ChangeKind::Removed,
        }];
        watcher.apply_changes(&mut store, &changes).unwrap();
        assert_eq!(store.lookup_size("default").height, Some(32));
    }
}

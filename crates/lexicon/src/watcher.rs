//! One-shot change subscriptions for disk sources.

use lexicon_common::{LexiconError, Result};
use notify::event::{MetadataKind, ModifyKind};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, trace, warn};

static NEXT_WATCH_ID: AtomicU64 = AtomicU64::new(1);

/// A live watch on a directory tree.
///
/// Dropping the handle removes the OS watch, which disconnects the event
/// channel and ends the listener thread.
pub(crate) struct WatchHandle {
    id: u64,
    root: PathBuf,
    _watcher: RecommendedWatcher,
}

impl WatchHandle {
    pub(crate) const fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        trace!("Closing watch {} on {:?}", self.id, self.root);
    }
}

/// Watches `root` recursively and calls `on_change` with the watch id on the
/// first create, modify or remove event. Later events are ignored.
pub(crate) fn watch<F>(root: &Path, on_change: F) -> Result<WatchHandle>
where
    F: FnOnce(u64) + Send + 'static,
{
    let id = NEXT_WATCH_ID.fetch_add(1, Ordering::Relaxed);
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();

    let mut watcher = notify::recommended_watcher(tx).map_err(|e| LexiconError::Watch(e.to_string()))?;
    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(|e| LexiconError::Watch(format!("{}: {e}", root.display())))?;

    let watched = root.to_path_buf();
    thread::Builder::new()
        .name(format!("lexicon-watch-{id}"))
        .spawn(move || {
            for result in rx {
                match result {
                    Ok(event) if is_change(&event.kind) => {
                        debug!("Change under {:?}: {:?} {:?}", watched, event.kind, event.paths);
                        on_change(id);
                        return;
                    }
                    Ok(_) => {}
                    Err(e) => warn!("File watch error on {:?}: {}", watched, e),
                }
            }
            trace!("Watch {} on {:?} disconnected", id, watched);
        })?;

    debug!("Watching {:?} for changes (watch {})", root, id);
    Ok(WatchHandle {
        id,
        root: root.to_path_buf(),
        _watcher: watcher,
    })
}

fn is_change(kind: &EventKind) -> bool {
    match kind {
        EventKind::Modify(ModifyKind::Metadata(MetadataKind::AccessTime)) => false,
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => true,
        EventKind::Access(_) | EventKind::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_common::test_utils::{fixture_tree, write_file};
    use notify::event::{AccessKind, CreateKind, DataChange, RemoveKind};
    use std::time::Duration;

    #[test]
    fn test_is_change() {
        assert!(is_change(&EventKind::Create(CreateKind::File)));
        assert!(is_change(&EventKind::Modify(ModifyKind::Data(DataChange::Content))));
        assert!(is_change(&EventKind::Remove(RemoveKind::File)));
        assert!(!is_change(&EventKind::Access(AccessKind::Any)));
        assert!(!is_change(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::AccessTime
        ))));
    }

    #[test]
    fn test_watch_fires_once() {
        let dir = fixture_tree(&[("en.json", "{}")]);
        let (tx, rx) = mpsc::channel();

        let handle = watch(dir.path(), move |id| {
            tx.send(id).unwrap();
        })
        .unwrap();

        write_file(dir.path(), "fr.json", "{}");
        let fired = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(fired, handle.id());

        write_file(dir.path(), "de.json", "{}");
        // The callback was consumed; the sender is gone with it.
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_watch_missing_root_fails() {
        let dir = fixture_tree(&[]);
        let result = watch(&dir.path().join("missing"), |_| {});
        assert!(matches!(result, Err(LexiconError::Watch(_))));
    }
}

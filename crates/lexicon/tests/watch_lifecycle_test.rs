//! Watch lifecycle across many reload cycles.
//!
//! Kept in its own test binary with a single test so the process thread
//! count is not disturbed by other tests running in parallel.

#![cfg(target_os = "linux")]

use lexicon::{Manager, Options};
use lexicon_common::test_utils::{create_temp_dir, fixture_tree, init_test_logging, write_file};
use std::fs;
use std::thread;
use std::time::{Duration, Instant};

fn thread_count() -> usize {
    fs::read_to_string("/proc/self/status")
        .unwrap()
        .lines()
        .find_map(|line| line.strip_prefix("Threads:"))
        .and_then(|count| count.trim().parse().ok())
        .unwrap()
}

fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_reload_cycles_do_not_leak_watches() {
    init_test_logging();
    let dir = fixture_tree(&[("en.json", r#"{"k": "v0"}"#)]);
    let staging = create_temp_dir();
    let manager = Manager::new(Options::new(dir.path().to_string_lossy()));

    assert_eq!(manager.translate("k", None), "v0");
    // Give the first watch's threads time to start before taking a baseline.
    thread::sleep(Duration::from_millis(200));
    let baseline = thread_count();

    let cycles = 25;
    for i in 1..=cycles {
        let expected = format!("v{i}");
        let staged = write_file(staging.path(), "en.json", &format!(r#"{{"k": "{expected}"}}"#));
        fs::rename(staged, dir.path().join("en.json")).unwrap();
        assert!(
            wait_for(|| manager.translate("k", None) == expected),
            "cycle {i} did not reload"
        );
    }

    assert!(manager.load_count() > cycles);
    assert!(
        wait_for(|| thread_count() <= baseline),
        "threads grew from {baseline} to {}",
        thread_count()
    );
}

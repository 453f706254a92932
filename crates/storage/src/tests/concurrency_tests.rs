//! Lost-update coverage: the increment must be one atomic upsert, never a
//! read-then-write pair, so no concurrent reader can erase another's bump.

#![expect(clippy::unwrap_used, reason = "test code")]

use std::thread;

use super::create_test_storage;

#[test]
fn test_sequential_then_concurrent_reads_sum_exactly() {
    let (storage, _temp_dir) = create_test_storage();

    for _ in 0..5 {
        storage.record_read("seinen", "Berserk").unwrap();
    }

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let storage = storage.clone();
            thread::spawn(move || storage.record_read("seinen", "Berserk").unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let top = storage.top_comics(1).unwrap();
    assert_eq!(top[0].views, 10, "increments must not be lost under concurrency");
}

#[test]
fn test_many_concurrent_writers_on_one_pair() {
    let (storage, _temp_dir) = create_test_storage();
    let threads: u64 = 4;
    let per_thread: u64 = 25;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let storage = storage.clone();
            thread::spawn(move || {
                for _ in 0..per_thread {
                    storage.record_read("action", "Akira").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let top = storage.top_comics(1).unwrap();
    assert_eq!(top[0].views, threads * per_thread);
}

#[test]
fn test_concurrent_writers_on_distinct_pairs_do_not_interfere() {
    let (storage, _temp_dir) = create_test_storage();

    let handles: Vec<_> = ["Akira", "Dune", "Uzumaki"]
        .into_iter()
        .map(|title| {
            let storage = storage.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    storage.record_read("mixed", title).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let top = storage.top_comics(10).unwrap();
    assert_eq!(top.len(), 3);
    assert!(top.iter().all(|t| t.views == 10));
}

//! Batch execution (component K, §4.K): a bounded pool of scoped threads
//! that preserves input order in the output regardless of completion
//! order, matching §5's ordering guarantee.
//!
//! No extra threading crate: `std::thread::scope` is sufficient and keeps
//! the dependency stack aligned with the teacher's.

use std::sync::Mutex;

use crate::engine::Engine;

/// Run `engine.detect` over every entry in `texts`, using up to
/// `engine.config().batch_size` worker threads. `results[i]` always
/// corresponds to `texts[i]`.
pub fn run(engine: &Engine, texts: &[String]) -> Vec<Vec<(String, String)>> {
    if texts.is_empty() {
        return Vec::new();
    }

    let worker_count = engine.config().batch_size.min(texts.len()).max(1);
    let results: Mutex<Vec<Option<Vec<(String, String)>>>> =
        Mutex::new((0..texts.len()).map(|_| None).collect());
    let next_index = Mutex::new(0usize);

    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            let next_index = &next_index;
            let results = &results;
            handles.push(scope.spawn(move || loop {
                let i = {
                    let mut guard = next_index.lock().expect("batch index lock poisoned");
                    if *guard >= texts.len() {
                        break;
                    }
                    let i = *guard;
                    *guard += 1;
                    i
                };
                let out = engine.detect(&texts[i]);
                results.lock().expect("batch results lock poisoned")[i] = Some(out);
            }));
        }
        for handle in handles {
            handle.join().expect("batch worker panicked");
        }
    });

    results
        .into_inner()
        .expect("batch results lock poisoned")
        .into_iter()
        .map(|r| r.unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn preserves_order_across_workers() {
        let engine = Engine::new(Config::default()).unwrap();
        let texts: Vec<String> = (0..20).map(|i| format!("sentence number {i} in english")).collect();
        let results = run(&engine, &texts);
        assert_eq!(results.len(), texts.len());
        for r in &results {
            assert!(!r.is_empty());
        }
    }

    #[test]
    fn empty_batch_yields_empty_result() {
        let engine = Engine::new(Config::default()).unwrap();
        assert!(run(&engine, &[]).is_empty());
    }
}

use std::time::{Duration, Instant};

use syncline::Severity;

const THREADS: usize = 8;
const LOGS_PER_THREAD: usize = 1000;

fn main() {
    syncline::set_minimum_level(Severity::Trace);
    syncline::info!("=== Basic multithreading test ===");

    let start = Instant::now();
    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            std::thread::Builder::new()
                .name(format!("worker-{thread_id}"))
                .spawn(move || {
                    for i in 0..LOGS_PER_THREAD {
                        syncline::trace!("Thread ", thread_id, " iteration ", i);
                        syncline::debug!("Thread ", thread_id, " processing item ", i);
                        if i % 100 == 0 {
                            syncline::info!("Thread ", thread_id, " checkpoint at ", i);
                        }
                        if i % 500 == 0 {
                            syncline::warn!("Thread ", thread_id, " halfway point reached");
                        }
                        std::thread::sleep(Duration::from_micros(10));
                    }
                    syncline::info!("Thread ", thread_id, " completed all iterations");
                })
                .expect("failed to spawn worker")
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    syncline::info!("Basic test completed. Duration: ", start.elapsed().as_millis(), "ms");

    // disabled levels cost one atomic load
    syncline::set_minimum_level(Severity::Error);
    let start = Instant::now();
    for i in 0..1_000_000 {
        syncline::debug!("never formatted ", i);
    }
    syncline::error!("1M disabled calls took ", start.elapsed().as_micros(), "us");
}

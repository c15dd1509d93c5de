use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use crossbeam_channel::bounded;
use syncline::{Severity, logger_config};

const PRODUCERS: usize = 4;
const CONSUMERS: usize = 3;
const ITEMS_PER_PRODUCER: usize = 500;

fn main() {
    let _logger = logger_config()
        .with_level(Severity::Debug)
        .with_location(true)
        .init_global()
        .expect("logger already initialized");
    syncline::info!("=== Producer-consumer test ===");

    let (sender, receiver) = bounded::<usize>(64);
    let produced = AtomicUsize::new(0);
    let consumed = AtomicUsize::new(0);

    thread::scope(|scope| {
        for producer_id in 0..PRODUCERS {
            let sender = sender.clone();
            let produced = &produced;
            scope.spawn(move || {
                syncline::info!("Producer ", producer_id, " starting");
                for i in 0..ITEMS_PER_PRODUCER {
                    let item = producer_id * ITEMS_PER_PRODUCER + i;
                    if sender.send(item).is_err() {
                        syncline::error!("Producer ", producer_id, " lost its consumers");
                        return;
                    }
                    produced.fetch_add(1, Ordering::Relaxed);
                    syncline::trace!("Producer ", producer_id, " produced item ", item);
                    if (i + 1) % 100 == 0 {
                        syncline::debug!(
                            "Producer ", producer_id, " progress: ", i + 1, "/", ITEMS_PER_PRODUCER
                        );
                    }
                }
                syncline::info!("Producer ", producer_id, " finished");
            });
        }
        drop(sender);

        for consumer_id in 0..CONSUMERS {
            let receiver = receiver.clone();
            let consumed = &consumed;
            scope.spawn(move || {
                syncline::info!("Consumer ", consumer_id, " starting");
                let mut count = 0usize;
                for item in receiver {
                    count += 1;
                    consumed.fetch_add(1, Ordering::Relaxed);
                    syncline::trace!("Consumer ", consumer_id, " processed item ", item);
                    if count % 200 == 0 {
                        syncline::debug!("Consumer ", consumer_id, " processed ", count, " items");
                    }
                }
                syncline::info!("Consumer ", consumer_id, " finished after processing ", count, " items");
            });
        }
    });

    syncline::info!("Producer-consumer test completed");
    syncline::info!(
        "Total produced: ", produced.load(Ordering::Relaxed),
        ", consumed: ", consumed.load(Ordering::Relaxed)
    );
    log::info!("the log facade is routed through the same sink");
}

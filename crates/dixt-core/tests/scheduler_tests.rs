//! Tests for the scheduler seam used by animated widgets.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dixt_core::logging::{is_dixt_target, targets};
use dixt_core::{Scheduler, SharedTimerManager, Signal, TimerId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Minimal self-rearming chain, the way a spinner drives itself.
struct Chain {
    scheduler: Arc<dyn Scheduler>,
    pending: Option<TimerId>,
    ticks: usize,
}

impl Chain {
    fn start(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.schedule_once(Duration::from_millis(10)));
        }
    }

    fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    fn fire(&mut self, id: TimerId) {
        if self.pending == Some(id) {
            self.ticks += 1;
            self.pending = Some(self.scheduler.schedule_once(Duration::from_millis(10)));
        }
    }
}

#[test]
fn test_chain_rearms_and_stops() {
    init_tracing();
    let timers = Arc::new(SharedTimerManager::new());
    let mut chain = Chain {
        scheduler: timers.clone(),
        pending: None,
        ticks: 0,
    };

    chain.start();
    chain.start();
    assert_eq!(timers.active_count(), 1);

    for _ in 0..3 {
        for id in timers.process_expired_at(Instant::now() + Duration::from_secs(1)) {
            chain.fire(id);
        }
    }
    assert_eq!(chain.ticks, 3);

    let stale = chain.pending.unwrap();
    chain.stop();
    assert!(!timers.is_pending(stale));
    chain.fire(stale);
    assert_eq!(chain.ticks, 3);
    assert!(timers
        .process_expired_at(Instant::now() + Duration::from_secs(1))
        .is_empty());
}

#[test]
fn test_cancel_twice_reports_false() {
    init_tracing();
    let timers = SharedTimerManager::new();
    let id = timers.schedule_once(Duration::from_millis(5));
    assert!(timers.cancel(id));
    assert!(!timers.cancel(id));
    assert!(timers.stop(id).is_err());
}

#[test]
fn test_signal_with_tuple_args() {
    init_tracing();
    let signal = Signal::<(String, usize)>::new();
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = seen.clone();
    signal.connect(move |(name, index)| sink.lock().push(format!("{name}:{index}")));

    signal.emit(("spin".to_string(), 2));
    assert_eq!(*seen.lock(), vec!["spin:2".to_string()]);
}

#[test]
fn test_targets_filterable() {
    assert!(is_dixt_target(targets::SPINNER));
    assert!(is_dixt_target(targets::TEMPLATES));
}

//! Core systems for dixt.
//!
//! This crate provides the foundational pieces the dixt widgets run on:
//!
//! - **Timers**: single-shot deferred timers with cancel-by-handle
//! - **Scheduler**: the [`Scheduler`] trait that animated widgets arm ticks through
//! - **Signal/Slot System**: notifications from widgets to the host application
//! - **Logging**: `tracing` target names per subsystem
//!
//! # Timer Example
//!
//! ```
//! use dixt_core::{Scheduler, SharedTimerManager};
//! use std::time::{Duration, Instant};
//!
//! let timers = SharedTimerManager::new();
//! let id = timers.schedule_once(Duration::from_millis(100));
//!
//! // The event loop polls for expired timers and routes each id to its owner.
//! let fired = timers.process_expired_at(Instant::now() + Duration::from_secs(1));
//! assert_eq!(fired, vec![id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use signal::{ConnectionId, Signal};
pub use timer::{Scheduler, SharedTimerManager, TimerId, TimerManager};

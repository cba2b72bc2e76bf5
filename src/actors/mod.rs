//! Concurrent stages of the monitoring pipeline
//!
//! Each stage runs as its own async task; they are connected by a single
//! bounded queue.
//!
//! ```text
//! ┌────────┐  RawPayload   ┌──────────────┐   ┌────────┐   ┌──────────┐
//! │ Poller │ ────────────▶ │ bounded mpsc │ ─▶│ Driver │ ─▶│  stdout  │
//! └────────┘  (capacity 3) └──────────────┘   └────────┘   └──────────┘
//!                                              decode → evaluate
//! ```
//!
//! ## Shutdown
//!
//! There is no external cancellation. The poller stops on its own once it
//! reaches the configured number of consecutive failures and drops the
//! sending half of the queue; the driver sees the closed queue and returns.

pub mod driver;
pub mod poller;

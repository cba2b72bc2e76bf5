//! Driver - Turns queued payloads into printed alerts
//!
//! ## Message Flow
//!
//! ```text
//! payload queue → decode → evaluate → stdout (one line per alert)
//!                    └─────────┴──── fault: log, skip payload, keep going
//! ```

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::{
    RawPayload,
    alerts::Alert,
    config::Thresholds,
    error::PipelineError,
    monitors::thresholds::evaluate,
    parser::decode,
};

/// Counters for one driver run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Payloads that decoded and evaluated
    pub processed: usize,

    /// Payloads dropped because of a decode or evaluation fault
    pub skipped: usize,

    /// Alerts printed
    pub alerts: usize,
}

pub struct Driver {
    thresholds: Thresholds,
}

impl Driver {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Decode and evaluate a single payload
    pub fn process(&self, payload: &[u8]) -> Result<Vec<Alert>, PipelineError> {
        let metrics = decode(payload)?;
        let alerts = evaluate(&metrics, &self.thresholds)?;
        Ok(alerts)
    }

    /// Consume the queue until the poller closes it
    ///
    /// A faulty payload only costs its own cycle.
    #[instrument(skip_all)]
    pub async fn run(&self, mut payloads: mpsc::Receiver<RawPayload>) -> PipelineSummary {
        debug!("starting driver with thresholds {:?}", self.thresholds);

        let mut summary = PipelineSummary::default();

        while let Some(payload) = payloads.recv().await {
            match self.process(&payload) {
                Ok(alerts) => {
                    summary.processed += 1;
                    summary.alerts += alerts.len();

                    for alert in alerts {
                        debug!(kind = %alert.kind(), "threshold exceeded");
                        println!("{alert}");
                    }
                }
                Err(e) => {
                    summary.skipped += 1;
                    warn!("skipping payload: {e}");
                }
            }
        }

        info!(
            "payload queue closed, pipeline stopped ({} processed, {} skipped, {} alerts)",
            summary.processed, summary.skipped, summary.alerts
        );

        summary
    }
}

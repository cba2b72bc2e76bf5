//! Failure tests for the pipeline
//!
//! These tests verify that the system handles failures gracefully:
//! - Unreachable endpoint
//! - Error status codes
//! - Slow responses
//! - Malformed payloads

use std::time::Duration;

use pretty_assertions::assert_eq;
use stats_monitor::actors::driver::PipelineSummary;
use stats_monitor::config::PollerConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::*;

#[tokio::test]
async fn test_unreachable_endpoint_terminates_cleanly() {
    // Nothing listens on the discard port
    let config = PollerConfig {
        url: "http://127.0.0.1:9/_stats".to_string(),
        timeout_ms: 200,
        interval_ms: 10,
        error_threshold: 2,
        queue_capacity: 3,
    };

    let summary = run_pipeline(config).await;

    assert_eq!(summary, PipelineSummary::default());
}

#[tokio::test]
async fn test_error_status_stops_after_threshold() {
    let mock_server = MockServer::start().await;

    // Body is valid but must be discarded because of the status
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string(OVERLOADED_STATS))
        .mount(&mock_server)
        .await;

    let summary = run_pipeline(create_test_poller_config(&mock_server, 4)).await;

    assert_eq!(summary, PipelineSummary::default());
    assert_eq!(received_requests(&mock_server).await, 4);

    // no requests after the queue closed
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(received_requests(&mock_server).await, 4);
}

#[tokio::test]
async fn test_slow_endpoint_counts_as_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HEALTHY_STATS)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let summary = run_pipeline(create_test_poller_config(&mock_server, 2)).await;

    assert_eq!(summary.processed, 0);
}

#[tokio::test]
async fn test_single_success_resets_error_counter() {
    let mock_server = MockServer::start().await;

    // fail, fail, ok, fail, fail, ok, then fail for good
    let responses = [500, 500, 200, 500, 500, 200];
    for status in responses {
        let template = if status == 200 {
            ResponseTemplate::new(200).set_body_string(HEALTHY_STATS)
        } else {
            ResponseTemplate::new(status)
        };

        Mock::given(method("GET"))
            .and(path(STATS_PATH))
            .respond_with(template)
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let summary = run_pipeline(create_test_poller_config(&mock_server, 3)).await;

    assert_eq!(summary.processed, 2);
    assert_eq!(received_requests(&mock_server).await, 9);
}

#[tokio::test]
async fn test_malformed_payload_does_not_stop_pipeline() {
    let mock_server = MockServer::start().await;

    let bodies = ["not,a,stats,line\n", "", OVERLOADED_STATS, "1,0,0,1,1,1,1\n"];
    for body in bodies {
        Mock::given(method("GET"))
            .and(path(STATS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let summary = run_pipeline(create_test_poller_config(&mock_server, 2)).await;

    assert_eq!(
        summary,
        PipelineSummary {
            processed: 1,
            skipped: 3,
            alerts: 2,
        }
    );
}

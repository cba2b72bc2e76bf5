//! End-to-end runs of the pipeline against a mock stats endpoint

use pretty_assertions::assert_eq;
use stats_monitor::actors::driver::PipelineSummary;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::*;

#[tokio::test]
async fn test_pipeline_processes_payloads_until_endpoint_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(OVERLOADED_STATS))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let summary = run_pipeline(create_test_poller_config(&mock_server, 3)).await;

    assert_eq!(
        summary,
        PipelineSummary {
            processed: 2,
            skipped: 0,
            alerts: 4,
        }
    );
    assert_eq!(received_requests(&mock_server).await, 5);
}

#[tokio::test]
async fn test_healthy_server_produces_no_alerts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(HEALTHY_STATS))
        .up_to_n_times(3)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let summary = run_pipeline(create_test_poller_config(&mock_server, 1)).await;

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.alerts, 0);
}

#[tokio::test]
async fn test_payloads_delivered_in_fetch_order() {
    let mock_server = MockServer::start().await;

    // equal priority: mocks answer in mount order, each one once
    for body in ["1,1,1,1,1,1,1\n", "2,2,2,2,2,2,2\n", "3,3,3,3,3,3,3\n"] {
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
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let mut payloads = spawn_poller(create_test_poller_config(&mock_server, 1));

    let mut received = vec![];
    while let Some(payload) = payloads.recv().await {
        received.push(String::from_utf8(payload).unwrap());
    }

    assert_eq!(
        received,
        vec!["1,1,1,1,1,1,1\n", "2,2,2,2,2,2,2\n", "3,3,3,3,3,3,3\n"]
    );
}

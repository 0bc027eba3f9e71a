use std::sync::Arc;
use std::time::{Duration, Instant};

use jobboard_core::JobId;
use jobboard_engine::{
    CatalogLoader, CatalogSettings, EngineEvent, EngineHandle, FailureKind, ReqwestCatalogSource,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn handle_for(server: &MockServer) -> EngineHandle {
    let settings = CatalogSettings {
        api_base_url: server.uri(),
        ..CatalogSettings::default()
    };
    let source = Arc::new(ReqwestCatalogSource::new(settings.clone()));
    EngineHandle::with_loader(CatalogLoader::new(source, &settings).unwrap())
}

async fn next_event(handle: &EngineHandle, within: Duration) -> Option<EngineEvent> {
    let deadline = Instant::now() + within;
    while Instant::now() < deadline {
        if let Some(event) = handle.try_recv() {
            return Some(event);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}

#[tokio::test(flavor = "multi_thread")]
async fn catalog_result_echoes_generation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/JobPortal/list_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": [{ "id": 1 }, { "id": 2 }]
        })))
        .mount(&server)
        .await;

    let handle = handle_for(&server);
    handle.load_catalog(7, None);

    match next_event(&handle, Duration::from_secs(5)).await {
        Some(EngineEvent::CatalogLoaded { generation, result }) => {
            assert_eq!(generation, 7);
            assert_eq!(result.expect("load ok").len(), 2);
        }
        other => panic!("expected catalog event, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn detail_failure_is_delivered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Job_post/5"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let handle = handle_for(&server);
    handle.load_job_detail(JobId::from(5u64), None);

    match next_event(&handle, Duration::from_secs(5)).await {
        Some(EngineEvent::JobDetailLoaded { job_id, result }) => {
            assert_eq!(job_id, JobId::from(5u64));
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(503));
        }
        other => panic!("expected detail event, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_discards_in_flight_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/JobPortal/list_jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({ "status": true, "data": [{ "id": 1 }] })),
        )
        .mount(&server)
        .await;

    let handle = handle_for(&server);
    handle.load_catalog(1, None);
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.shutdown();
    assert!(handle.is_shut_down());

    assert!(next_event(&handle, Duration::from_millis(600)).await.is_none());
}

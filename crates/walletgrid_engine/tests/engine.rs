use std::thread;
use std::time::{Duration, Instant};

use walletgrid_engine::{
    EngineConfig, EngineEvent, EngineHandle, ExplorerError, ExplorerSettings, PageQuery,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> EngineConfig {
    EngineConfig {
        explorer: ExplorerSettings {
            base_url: server.uri(),
            ..ExplorerSettings::default()
        },
        extension_icons: Vec::new(),
    }
}

fn query() -> PageQuery {
    PageQuery {
        page: 1,
        entries: 40,
        device: "desktop".to_string(),
        search: String::new(),
        version: 1,
        chains: String::new(),
    }
}

fn wait_for_event(handle: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        if Instant::now() > deadline {
            panic!("no engine event within the deadline");
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_command_round_trips_as_an_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "listings": [{ "id": "rainbow", "name": "Rainbow" }],
            "total": 1,
            "page": 1
        })))
        .mount(&server)
        .await;

    let handle = EngineHandle::new(config(&server));
    handle.fetch_page(7, query());

    let EngineEvent::PageFetched { generation, result } = wait_for_event(&handle);
    assert_eq!(generation, 7);
    let page = result.expect("fetch ok");
    assert_eq!(page.listings.len(), 1);
    assert_eq!(page.listings[0].name, "Rainbow");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_failure_round_trips_as_an_error_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallets"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let handle = EngineHandle::new(config(&server));
    handle.fetch_page(1, query());

    let EngineEvent::PageFetched { result, .. } = wait_for_event(&handle);
    assert_eq!(result.unwrap_err(), ExplorerError::HttpStatus(503));
}

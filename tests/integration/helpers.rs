use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use contributors_api::{
    config::Config,
    infrastructure::upstream::http_contributor_source::HttpContributorSource,
    presentation::http::{
        routes::{create_router, with_http_layers},
        state::AppState,
    },
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub upstream_url: String,
}

pub fn fixture_contributors() -> Value {
    json!([
        {
            "github": "bob",
            "name": "Bob Inactive",
            "image": "https://avatars.example.com/bob.png",
            "countryCode": "gb",
            "active": false,
            "joined": "2018-03-10T00:00:00.000Z",
            "teamIds": [2]
        },
        {
            "github": "carol",
            "name": "Carol Newer",
            "image": "https://avatars.example.com/carol.png",
            "countryCode": "ca",
            "active": true,
            "joined": "2021-06-01T00:00:00.000Z",
            "teamIds": [1, 3]
        },
        {
            "github": "alice",
            "name": "Alice Early",
            "image": "https://avatars.example.com/alice.png",
            "countryCode": "us",
            "active": true,
            "joined": "2020-01-01",
            "teamIds": [1]
        },
        {
            "github": "dave",
            "name": "Dave Oldest",
            "image": "https://avatars.example.com/dave.png",
            "countryCode": "au",
            "active": false,
            "joined": "2017-07-07T00:00:00.000Z",
            "teamIds": []
        }
    ])
}

/// Entries with nulls, missing fields and values outside `i32`.
pub fn sparse_contributors() -> Value {
    json!([
        {
            "github": "ok",
            "name": "Complete Entry",
            "image": "https://avatars.example.com/ok.png",
            "countryCode": "de",
            "active": true,
            "joined": "2019-01-01",
            "teamIds": [1]
        },
        {
            "github": "nullimg",
            "name": "Null Image",
            "image": null,
            "countryCode": "se",
            "active": true,
            "joined": "2018-01-01",
            "teamIds": [2]
        },
        {
            "github": "noteams",
            "name": "No Teams",
            "image": "https://avatars.example.com/noteams.png",
            "countryCode": "jp",
            "active": false,
            "joined": "2016-01-01"
        },
        {
            "github": "bigteam",
            "name": "Big Team Id",
            "active": false,
            "joined": "2017-01-01",
            "teamIds": [4294967296u64]
        }
    ])
}

pub const SLOW_UPSTREAM_DELAY: Duration = Duration::from_secs(3);

/// Serves the fixture document plus failure modes on an ephemeral port.
pub async fn spawn_upstream() -> String {
    let upstream = Router::new()
        .route(
            "/contributors.json",
            get(|| async { axum::Json(fixture_contributors()) }),
        )
        .route(
            "/sparse.json",
            get(|| async { axum::Json(sparse_contributors()) }),
        )
        .route(
            "/missing-github.json",
            get(|| async {
                let mut entries = fixture_contributors();
                if let Some(list) = entries.as_array_mut() {
                    list.push(json!({ "name": "Nobody", "active": true }));
                }
                axum::Json(entries)
            }),
        )
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(SLOW_UPSTREAM_DELAY).await;
                axum::Json(fixture_contributors())
            }),
        )
        .route(
            "/unavailable.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response() }),
        )
        .route(
            "/garbage.json",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "application/json")],
                    "{\"not\": \"a list\"",
                )
                    .into_response()
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind fixture upstream");
    let addr = listener.local_addr().expect("fixture upstream address");
    tokio::spawn(async move {
        axum::serve(listener, upstream)
            .await
            .expect("fixture upstream crashed");
    });

    format!("http://{}", addr)
}

pub const TEST_ORIGIN: &str = "https://contributors.example.com";

fn build_config(contributors_url: String, upstream_timeout_seconds: u64) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        contributors_url,
        upstream_timeout_seconds,
        upstream_user_agent: "contributors-api-tests".to_string(),
        allowed_origins: vec![TEST_ORIGIN.to_string()],
    }
}

/// Build the full application pointed at `document` on a fresh fixture upstream.
pub async fn spawn_app_with_document(document: &str) -> TestApp {
    spawn_app_with_timeout(document, 5).await
}

pub async fn spawn_app_with_timeout(document: &str, upstream_timeout_seconds: u64) -> TestApp {
    let base = spawn_upstream().await;
    let upstream_url = format!("{}/{}", base, document);
    let config = build_config(upstream_url.clone(), upstream_timeout_seconds);

    let source = HttpContributorSource::new(
        config.contributors_url.clone(),
        Duration::from_secs(config.upstream_timeout_seconds),
        config.upstream_user_agent.clone(),
    )
    .expect("failed to build contributor source");

    let state = AppState {
        config: config.clone(),
        contributor_source: Arc::new(source),
    };

    TestApp {
        app: with_http_layers(create_router(state), &config),
        upstream_url,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_document("contributors.json").await
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

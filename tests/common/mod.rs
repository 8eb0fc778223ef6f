#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use assessaid::api::{self, RecommendClient};
use assessaid::catalog::DemoCatalog;
use assessaid::models::AppState;
use assessaid::routes::build_app;

/// How the stub recommendation service answers `POST /recommend`.
#[derive(Clone)]
pub enum Reply {
    Body(StatusCode, String),
    /// Wait for `release`, then answer with the body.
    Hold(String),
}

#[derive(Clone)]
struct Stub {
    reply: Reply,
    health: (StatusCode, String),
    queries: Arc<Mutex<Vec<String>>>,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

pub struct Backend {
    pub base_url: String,
    pub queries: Arc<Mutex<Vec<String>>>,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Backend {
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn recommend(State(stub): State<Stub>, Json(body): Json<serde_json::Value>) -> Response {
    let query = body["query"].as_str().unwrap_or_default().to_string();
    stub.queries.lock().unwrap().push(query);
    match stub.reply {
        Reply::Body(status, body) => json_response(status, body),
        Reply::Hold(body) => {
            stub.started.notify_one();
            stub.release.notified().await;
            json_response(StatusCode::OK, body)
        }
    }
}

async fn health(State(stub): State<Stub>) -> Response {
    json_response(stub.health.0, stub.health.1)
}

pub async fn spawn_backend(reply: Reply) -> Backend {
    spawn_backend_with_health(reply, StatusCode::OK, r#"{"status":"healthy"}"#).await
}

pub async fn spawn_backend_with_health(reply: Reply, health_status: StatusCode, health_body: &str) -> Backend {
    let stub = Stub {
        reply,
        health: (health_status, health_body.to_string()),
        queries: Arc::new(Mutex::new(Vec::new())),
        started: Arc::new(Notify::new()),
        release: Arc::new(Notify::new()),
    };
    let backend = Backend {
        base_url: String::new(),
        queries: stub.queries.clone(),
        started: stub.started.clone(),
        release: stub.release.clone(),
    };
    let app = Router::new()
        .route("/recommend", post(recommend))
        .route("/health", get(health))
        .with_state(stub);
    let base_url = serve(app).await;
    Backend { base_url, ..backend }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> RecommendClient {
    api::set_silent(true);
    RecommendClient::new(api::build_http_client().unwrap(), base_url)
}

/// Run the web app against `backend` and return its base URL.
pub async fn spawn_app(backend: &Backend) -> String {
    let client = client_for(&backend.base_url);
    let state = AppState::new(
        Arc::new(client),
        Arc::new(DemoCatalog::new()),
        backend.base_url.clone(),
        "http://localhost:8080".to_string(),
    );
    serve(build_app(state)).await
}

pub fn assessment_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "product_id": id,
        "product_name": name,
        "url": format!("https://www.shl.com/products/{}", id),
        "adaptive_support": "No",
        "description": format!("{} description", name),
        "duration": 25,
        "remote_support": "Yes",
        "test_type": ["Knowledge & Skills"]
    })
}

pub fn success_body(assessments: &[(&str, &str)]) -> String {
    let list: Vec<serde_json::Value> = assessments.iter().map(|(id, name)| assessment_json(id, name)).collect();
    serde_json::json!({
        "status": "success",
        "message": "Found matching assessments",
        "recommended_assessments": list
    })
    .to_string()
}

/// Browser stand-in: no redirects followed, session cookie sent by hand.
pub struct Browser {
    pub http: reqwest::Client,
    pub app: String,
    pub cookie: String,
}

impl Browser {
    pub async fn open(app: &str) -> Browser {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let resp = http.get(format!("{}/", app)).send().await.unwrap();
        let set_cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .expect("first visit starts a session")
            .to_str()
            .unwrap()
            .to_string();
        let cookie = set_cookie.split(';').next().unwrap().to_string();
        assert!(cookie.starts_with("session_id="));
        Browser { http, app: app.to_string(), cookie }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http
            .get(format!("{}{}", self.app, path))
            .header(header::COOKIE, &self.cookie)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        let body = form
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.http
            .post(format!("{}{}", self.app, path))
            .header(header::COOKIE, &self.cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn page(&self, path: &str) -> String {
        self.get(path).await.text().await.unwrap()
    }
}

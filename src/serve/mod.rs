//! HTTP layer - JSON API plus the embedded browser UI.
//!
//! Each API route corresponds one-to-one to a store operation:
//!
//! - `GET /api/tasks` — list, with optional `q` and `status` filters
//! - `POST /api/tasks` — create
//! - `GET /api/tasks/{id}` — fetch one
//! - `PUT /api/tasks/{id}` — partial update
//! - `POST /api/tasks/{id}/toggle` — flip completion
//! - `DELETE /api/tasks/{id}` — delete
//!
//! `GET /` serves the single-page UI; `GET /health` is a liveness probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::task::{Error, NewTask, StatusFilter, Task, TaskPatch, TaskStore};

const INDEX_HTML: &str = include_str!("index.html");

type SharedStore = Arc<Mutex<TaskStore>>;

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// A task as rendered to clients: the stored fields plus derived state.
#[derive(Debug, Serialize)]
struct TaskView {
    id: String,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_overdue: bool,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
            is_overdue: task.is_overdue(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(err: &Error) -> (StatusCode, Json<ErrorBody>) {
    let status = if matches!(err, Error::NotFound(_)) {
        StatusCode::NOT_FOUND
    } else if err.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        error!("store operation failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn list_tasks(
    State(store): State<SharedStore>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let status = match query.status.as_deref() {
        Some(raw) => match StatusFilter::parse(raw) {
            Some(filter) => filter,
            None => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorBody {
                        error: format!("Unknown status filter: {raw}"),
                    }),
                )
                    .into_response();
            }
        },
        None => StatusFilter::All,
    };

    let store = store.lock().await;
    let mut tasks = store.search(query.q.as_deref(), status);
    // Display order: active tasks first, then by due date with undated
    // tasks last, then least recently touched first.
    tasks.sort_by_key(|t| (t.completed, t.due_date.unwrap_or(NaiveDate::MAX), t.updated_at));

    let views: Vec<TaskView> = tasks.into_iter().map(TaskView::from).collect();
    Json(views).into_response()
}

async fn create_task(
    State(store): State<SharedStore>,
    Json(input): Json<NewTask>,
) -> impl IntoResponse {
    let mut store = store.lock().await;
    match store.add(input) {
        Ok(task) => (StatusCode::CREATED, Json(TaskView::from(&task))).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn get_task(State(store): State<SharedStore>, Path(id): Path<String>) -> impl IntoResponse {
    let store = store.lock().await;
    match store.get(&id) {
        Ok(task) => Json(TaskView::from(task)).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn update_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> impl IntoResponse {
    let mut store = store.lock().await;
    match store.update(&id, patch) {
        Ok(task) => Json(TaskView::from(&task)).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn toggle_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut store = store.lock().await;
    match store.toggle_completed(&id) {
        Ok(task) => Json(TaskView::from(&task)).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn delete_task(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut store = store.lock().await;
    match store.remove(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

/// Build the application router around a store handle.
pub fn router(store: TaskStore) -> Router {
    let shared: SharedStore = Arc::new(Mutex::new(store));
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(toggle_task))
        .with_state(shared)
}

/// Handle to a running HTTP server.
pub struct Server {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Server {
    /// Bind and start serving. Pass port 0 to pick an ephemeral port.
    pub async fn start(host: &str, port: u16, store: TaskStore) -> anyhow::Result<Self> {
        let app = router(store);

        let bind_addr = format!("{host}:{port}");
        let listener = TcpListener::bind(&bind_addr).await?;
        let addr = listener.local_addr()?;

        info!("taskwell listening on http://{addr}/");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("HTTP server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// The address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the serve task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }

    /// Block until the serve task exits.
    pub async fn wait(self) -> anyhow::Result<()> {
        self.handle.await?;
        Ok(())
    }
}

//! In-memory stand-in for the todo backend.
//!
//! Serves the same five `/todos` routes as the real service. Ids are
//! sequential integers; `PUT` replaces the stored fields wholesale.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct TodoBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Default)]
pub struct Store {
    next_id: AtomicI64,
    todos: RwLock<BTreeMap<i64, Todo>>,
}

pub type Db = Arc<Store>;

/// Port the client falls back to when no base URL is configured.
pub const DEFAULT_PORT: &str = "8080";

/// Loopback bind address for `port`, or `DEFAULT_PORT` when unset.
pub fn listen_addr(port: Option<&str>) -> String {
    format!("127.0.0.1:{}", port.unwrap_or(DEFAULT_PORT))
}

pub fn app() -> Router {
    let db: Db = Arc::new(Store::default());
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("mock todo server listening on {addr}");
    }
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.todos.read().await;
    Json(todos.values().cloned().collect())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<TodoBody>) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: db.next_id.fetch_add(1, Ordering::Relaxed) + 1,
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    db.todos.write().await.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, StatusCode> {
    let todos = db.todos.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TodoBody>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.todos.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.description = input.description;
    todo.completed = input.completed;
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    let mut todos = db.todos.write().await;
    todos.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

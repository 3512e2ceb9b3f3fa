use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Alumno {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Alumno {
    pub fn named(id: u64, name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::from(name));
        Self { id, fields }
    }

    fn name_matches(&self, needle: &str) -> bool {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.to_lowercase().contains(needle))
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Alumno>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with `alumnos`.
pub fn app_with(alumnos: Vec<Alumno>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        alumnos.into_iter().map(|alumno| (alumno.id, alumno)).collect(),
    ));
    Router::new()
        .route("/api/alumnos", get(list_alumnos).post(create_alumno))
        .route(
            "/api/alumnos/{id}",
            get(get_alumno).put(update_alumno).delete(delete_alumno),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_alumnos(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Alumno>> {
    let alumnos = db.read().await;
    let needle = params.name.map(|name| name.to_lowercase());
    Json(
        alumnos
            .values()
            .filter(|alumno| needle.as_deref().is_none_or(|n| alumno.name_matches(n)))
            .cloned()
            .collect(),
    )
}

async fn create_alumno(
    State(db): State<Db>,
    Json(mut fields): Json<Map<String, Value>>,
) -> (StatusCode, Json<Alumno>) {
    fields.remove("id");
    let mut alumnos = db.write().await;
    let id = alumnos.keys().next_back().map_or(1, |last| last + 1);
    let alumno = Alumno { id, fields };
    alumnos.insert(id, alumno.clone());
    tracing::debug!(id, "alumno created");
    (StatusCode::CREATED, Json(alumno))
}

async fn get_alumno(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Alumno>, StatusCode> {
    let alumnos = db.read().await;
    alumnos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_alumno(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<Alumno>,
) -> StatusCode {
    let mut alumnos = db.write().await;
    match alumnos.get_mut(&id) {
        Some(stored) => {
            stored.fields = input.fields;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_alumno(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut alumnos = db.write().await;
    match alumnos.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

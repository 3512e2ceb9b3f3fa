//! Full CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every
//! `AlumnosService` operation over real HTTP through a ureq-backed
//! `Transport`. Validates request building, response parsing and the
//! message log end-to-end with the actual server.

use std::sync::Arc;

use alumnos_core::{
    Alumno, AlumnosClient, AlumnosService, ApiError, HttpMethod, HttpRequest, HttpResponse,
    MessageService, NewAlumno, Transport,
};
use async_trait::async_trait;
use serde_json::Value;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Runs the blocking ureq round-trip off the async runtime.
struct UreqTransport;

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tokio::task::spawn_blocking(move || execute(request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

async fn start_mock_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

#[tokio::test(flavor = "multi_thread")]
async fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
    let base_url = start_mock_server().await;
    let messages = Arc::new(MessageService::new());
    let service = AlumnosService::new(
        AlumnosClient::new(&base_url),
        Arc::new(UreqTransport),
        messages.clone(),
    );

    // Step 2: list — should be empty.
    assert!(service.get_alumnos().await.is_empty(), "expected empty list");

    // Step 3: create two alumnos.
    let ana = service
        .add_alumno(&NewAlumno::new().with_field("name", "Ana").with_field("curso", "1A"))
        .await
        .expect("create Ana");
    let luis = service
        .add_alumno(&NewAlumno::new().with_field("name", "Luis"))
        .await
        .expect("create Luis");
    assert_eq!(ana.id, 1);
    assert_eq!(luis.id, 2);
    assert_eq!(ana.fields["curso"], "1A");

    // Step 4: get the created alumno.
    let fetched = service.get_alumno(ana.id).await.expect("get Ana");
    assert_eq!(fetched, ana);

    // Step 5: search.
    let found = service.search_alumnos("AN").await;
    assert_eq!(found, vec![ana.clone()]);
    assert!(service.search_alumnos("zoe").await.is_empty());
    assert!(service.search_alumnos("  ").await.is_empty());

    // Step 6: update.
    let renamed = ana.clone().with_field("name", "Ana Belén");
    assert_eq!(service.update_alumno(&renamed).await, Some(Value::Null));
    let fetched = service.get_alumno(ana.id).await.expect("get renamed Ana");
    assert_eq!(fetched.name(), Some("Ana Belén"));

    // Step 7: delete by record and by id.
    assert_eq!(service.delete_alumno(&renamed).await, Some(Value::Null));
    assert_eq!(service.delete_alumno(luis.id).await, Some(Value::Null));

    // Step 8: get after delete — fallback.
    assert!(service.get_alumno(ana.id).await.is_none());

    // Step 9: delete again — fallback.
    assert!(service.delete_alumno(ana.id).await.is_none());

    // Step 10: list — should be empty again.
    assert!(service.get_alumnos().await.is_empty(), "expected empty list after delete");

    let log = messages.messages();
    assert_eq!(
        log,
        vec![
            "AlumnosService: Alumnos recuperados",
            "AlumnosService: Alumno agregado con id=1",
            "AlumnosService: Alumno agregado con id=2",
            "AlumnosService: Alumno encontrado ID=1",
            "AlumnosService: coincidencia alumno \"AN\"",
            "AlumnosService: no hay alumnos \"zoe\"",
            "AlumnosService: Alumno actualizado ID=1",
            "AlumnosService: Alumno encontrado ID=1",
            "AlumnosService: alumno borrado id=1",
            "AlumnosService: alumno borrado id=2",
            "AlumnosService: getAlumno id=1 fallida: resource not found",
            "AlumnosService: deleteAlumno fallida: resource not found",
            "AlumnosService: Alumnos recuperados",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn record_field_survives_round_trip() {
    let base_url = start_mock_server().await;
    let service = AlumnosService::new(
        AlumnosClient::new(&base_url),
        Arc::new(UreqTransport),
        Arc::new(MessageService::new()),
    );

    let created = service
        .add_alumno(&NewAlumno::new().with_field("name", "Eva").with_field("edad", 15))
        .await
        .unwrap();
    let listed: Vec<Alumno> = service.get_alumnos().await;
    assert_eq!(listed, vec![created]);
    assert_eq!(listed[0].fields["edad"], 15);
}

//! Stateless HTTP request builder and response parser for the alumnos API.
//!
//! # Design
//! `AlumnosClient` holds only the resource URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round-trip is left to the caller.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Alumno, AlumnoKey, NewAlumno};

/// Path of the alumnos collection relative to the API base URL.
pub const RESOURCE_PATH: &str = "api/alumnos";

/// Synchronous, stateless client for the alumnos API.
#[derive(Debug, Clone)]
pub struct AlumnosClient {
    resource_url: String,
}

impl AlumnosClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            resource_url: format!("{}/{RESOURCE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn build_get_alumnos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.resource_url.clone())
    }

    pub fn build_get_alumno(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_update_alumno(&self, alumno: &Alumno) -> Result<HttpRequest, ApiError> {
        let body = to_json(alumno)?;
        Ok(self.json_request(HttpMethod::Put, self.item_url(alumno.id), body))
    }

    pub fn build_add_alumno(&self, input: &NewAlumno) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.json_request(HttpMethod::Post, self.resource_url.clone(), body))
    }

    pub fn build_delete_alumno(&self, key: impl Into<AlumnoKey>) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url(key.into().id()))
    }

    /// The term is sent as-is (url-encoded); blank-term handling belongs to
    /// the caller.
    pub fn build_search_alumnos(&self, term: &str) -> Result<HttpRequest, ApiError> {
        let query = serde_urlencoded::to_string(&[("name", term)])
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.request(HttpMethod::Get, format!("{}?{query}", self.resource_url)))
    }

    pub fn parse_get_alumnos(&self, response: HttpResponse) -> Result<Vec<Alumno>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_alumno(&self, response: HttpResponse) -> Result<Alumno, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_alumno(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        acknowledgement(&response.body)
    }

    pub fn parse_add_alumno(&self, response: HttpResponse) -> Result<Alumno, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_delete_alumno(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        acknowledgement(&response.body)
    }

    pub fn parse_search_alumnos(&self, response: HttpResponse) -> Result<Vec<Alumno>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{id}", self.resource_url)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request(&self, method: HttpMethod, path: String, body: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Opaque reply to update/delete. An empty body acknowledges as `Null`.
fn acknowledgement(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    from_json(body)
}

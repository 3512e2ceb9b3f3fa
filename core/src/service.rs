//! Fail-soft asynchronous service over the alumnos API.
//!
//! # Design
//! Every operation builds its request with `AlumnosClient`, executes it on
//! the injected `Transport` and parses the reply, all inside [`fail_soft`].
//! That helper is the only place errors are handled: on success it logs the
//! operation's success line, on failure it reports the error to the
//! `DiagnosticSink`, logs `"<operation> fallida: <error>"` and resolves to
//! the operation's fallback value. Each backend call logs exactly one line.
//!
//! [`fail_soft`]: AlumnosService::fail_soft

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::client::AlumnosClient;
#[cfg(feature = "reqwest")]
use crate::config::ClientConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::MessageLog;
use crate::transport::Transport;
#[cfg(feature = "reqwest")]
use crate::transport::ReqwestTransport;
use crate::types::{Alumno, AlumnoKey, NewAlumno};

const LOG_PREFIX: &str = "AlumnosService";

/// Asynchronous client for the alumnos resource that never fails.
///
/// Cheap to clone; clones share the same collaborators.
#[derive(Clone)]
pub struct AlumnosService {
    client: AlumnosClient,
    transport: Arc<dyn Transport>,
    messages: Arc<dyn MessageLog>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl AlumnosService {
    /// Errors are reported through [`TracingSink`] unless
    /// [`with_diagnostics`](Self::with_diagnostics) replaces it.
    pub fn new(
        client: AlumnosClient,
        transport: Arc<dyn Transport>,
        messages: Arc<dyn MessageLog>,
    ) -> Self {
        Self {
            client,
            transport,
            messages,
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Wires up a `ReqwestTransport` for `config.base_url`.
    #[cfg(feature = "reqwest")]
    pub fn from_config(
        config: &ClientConfig,
        messages: Arc<dyn MessageLog>,
    ) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(
            AlumnosClient::new(&config.base_url),
            Arc::new(transport),
            messages,
        ))
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn client(&self) -> &AlumnosClient {
        &self.client
    }

    /// All alumnos, or an empty list on failure.
    pub async fn get_alumnos(&self) -> Vec<Alumno> {
        self.fail_soft(
            "getAlumnos",
            Vec::new(),
            async {
                let response = self.send(self.client.build_get_alumnos()).await?;
                self.client.parse_get_alumnos(response)
            },
            |_| "Alumnos recuperados".to_string(),
        )
        .await
    }

    pub async fn get_alumno(&self, id: u64) -> Option<Alumno> {
        self.fail_soft(
            &format!("getAlumno id={id}"),
            None,
            async {
                let response = self.send(self.client.build_get_alumno(id)).await?;
                self.client.parse_get_alumno(response)
            },
            |_| format!("Alumno encontrado ID={id}"),
        )
        .await
    }

    /// Replaces the stored record with `alumno`. Resolves to the backend's
    /// acknowledgement (`Value::Null` for an empty reply).
    pub async fn update_alumno(&self, alumno: &Alumno) -> Option<Value> {
        self.fail_soft(
            "updateAlumno",
            None,
            async {
                let request = self.client.build_update_alumno(alumno)?;
                let response = self.send(request).await?;
                self.client.parse_update_alumno(response)
            },
            |_| format!("Alumno actualizado ID={}", alumno.id),
        )
        .await
    }

    /// Creates an alumno and resolves to the stored record, id included.
    pub async fn add_alumno(&self, input: &NewAlumno) -> Option<Alumno> {
        self.fail_soft(
            "addAlumno",
            None,
            async {
                let request = self.client.build_add_alumno(input)?;
                let response = self.send(request).await?;
                self.client.parse_add_alumno(response)
            },
            |created: &Alumno| format!("Alumno agregado con id={}", created.id),
        )
        .await
    }

    /// Deletes by id or by record; both address `api/alumnos/<id>`.
    pub async fn delete_alumno(&self, key: impl Into<AlumnoKey>) -> Option<Value> {
        let key = key.into();
        self.fail_soft(
            "deleteAlumno",
            None,
            async {
                let response = self.send(self.client.build_delete_alumno(key)).await?;
                self.client.parse_delete_alumno(response)
            },
            |_| format!("alumno borrado id={}", key.id()),
        )
        .await
    }

    /// Alumnos whose name matches `term`. A blank term resolves to an empty
    /// list without contacting the backend or logging.
    pub async fn search_alumnos(&self, term: &str) -> Vec<Alumno> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        self.fail_soft(
            "searchAlumno",
            Vec::new(),
            async {
                let request = self.client.build_search_alumnos(term)?;
                let response = self.send(request).await?;
                self.client.parse_search_alumnos(response)
            },
            |found: &Vec<Alumno>| {
                if found.is_empty() {
                    format!("no hay alumnos \"{term}\"")
                } else {
                    format!("coincidencia alumno \"{term}\"")
                }
            },
        )
        .await
    }

    /// Runs `call`, converting its success into `T` or substituting
    /// `fallback` on any error. Logs exactly one line either way.
    async fn fail_soft<S, T, F>(
        &self,
        operation: &str,
        fallback: T,
        call: F,
        on_success: impl FnOnce(&S) -> String,
    ) -> T
    where
        F: Future<Output = Result<S, ApiError>>,
        T: From<S>,
    {
        match call.await {
            Ok(value) => {
                self.log(on_success(&value));
                T::from(value)
            }
            Err(error) => {
                self.diagnostics.report(operation, &error);
                self.log(format!("{operation} fallida: {error}"));
                fallback
            }
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.execute(request).await?;
        tracing::debug!(%method, %path, status = response.status, "alumnos request completed");
        Ok(response)
    }

    fn log(&self, message: impl Display) {
        self.messages.add(format!("{LOG_PREFIX}: {message}"));
    }
}

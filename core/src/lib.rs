//! Client core for the `api/alumnos` resource.
//!
//! # Overview
//! Two layers sit on top of each other:
//! - [`AlumnosClient`] builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - [`AlumnosService`] drives an injected [`Transport`] through the client
//!   and wraps every operation in the same fail-soft handler: failures are
//!   reported to a [`DiagnosticSink`], logged to a [`MessageLog`], and
//!   replaced by a fallback value. Callers never see an error from it.
//!
//! # Design
//! - Both layers are stateless apart from the base URL and their `Arc`ed
//!   collaborators.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod messages;
pub mod service;
pub mod transport;
pub mod types;

pub use client::AlumnosClient;
pub use config::ClientConfig;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{MessageLog, MessageService};
pub use service::AlumnosService;
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::{Alumno, AlumnoKey, NewAlumno};

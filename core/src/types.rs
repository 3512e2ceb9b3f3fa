//! Domain DTOs for the alumnos API.
//!
//! # Design
//! The client only relies on the numeric `id`. Every other attribute is kept
//! in a flattened JSON map so records round-trip unchanged whatever shape the
//! backend gives them. These types mirror the mock-server's schema but are
//! defined independently.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single alumno record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alumno {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Alumno {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Sets an attribute, replacing any previous value. `id` is not an
    /// attribute and is ignored here.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        if key != "id" {
            self.fields.insert(key.to_string(), value.into());
        }
        self
    }

    /// The `name` attribute, if the backend sent one as a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }
}

/// Request payload for creating an alumno. The backend assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewAlumno {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewAlumno {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        if key != "id" {
            self.fields.insert(key.to_string(), value.into());
        }
        self
    }
}

/// Identifies the alumno to delete, given either its id or the full record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlumnoKey(pub u64);

impl AlumnoKey {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl From<u64> for AlumnoKey {
    fn from(id: u64) -> Self {
        AlumnoKey(id)
    }
}

impl From<&Alumno> for AlumnoKey {
    fn from(alumno: &Alumno) -> Self {
        AlumnoKey(alumno.id)
    }
}

impl From<Alumno> for AlumnoKey {
    fn from(alumno: Alumno) -> Self {
        AlumnoKey(alumno.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alumno_keeps_unknown_attributes() {
        let raw = r#"{"id":7,"name":"Ana","curso":"3B","edad":15}"#;
        let alumno: Alumno = serde_json::from_str(raw).unwrap();
        assert_eq!(alumno.id, 7);
        assert_eq!(alumno.name(), Some("Ana"));
        assert_eq!(alumno.fields["curso"], "3B");

        let back = serde_json::to_value(&alumno).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn alumno_requires_numeric_id() {
        assert!(serde_json::from_str::<Alumno>(r#"{"name":"Ana"}"#).is_err());
        assert!(serde_json::from_str::<Alumno>(r#"{"id":"7","name":"Ana"}"#).is_err());
    }

    #[test]
    fn new_alumno_serializes_without_id() {
        let input = NewAlumno::new().with_field("name", "Luis").with_field("id", 3);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Luis"}));
    }

    #[test]
    fn key_from_id_and_record_agree() {
        let alumno = Alumno::new(42).with_field("name", "Eva");
        assert_eq!(AlumnoKey::from(42_u64), AlumnoKey::from(&alumno));
        assert_eq!(AlumnoKey::from(alumno).id(), 42);
    }
}

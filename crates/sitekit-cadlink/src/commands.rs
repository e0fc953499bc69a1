//! CAD host command interface.
//!
//! Commands are blocking round trips issued one at a time; the host answers
//! with opaque JSON acknowledgements. Polyline payloads always carry their
//! coordinates in drawing order, start to end.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sitekit_core::{CadError, Point2, Result};
use std::collections::HashMap;

/// A 2-D coordinate as understood by the CAD host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for Coordinate {
    fn from(point: Point2) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Payload of one polyline creation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineData {
    /// Vertices in drawing order.
    pub coordinates: Vec<Coordinate>,
}

impl PolylineData {
    /// A straight two-point polyline from `start` to `end`. The drawing
    /// engine only ever issues this shape.
    pub fn segment(start: Point2, end: Point2) -> Self {
        Self {
            coordinates: vec![start.into(), end.into()],
        }
    }
}

/// Opaque acknowledgement returned by the host. Never interpreted, only
/// echoed into result logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandAck {
    /// Raw response payload.
    pub raw: Value,
}

/// Blocking command interface to the CAD host.
///
/// Implementations issue one command per call and return when the host has
/// acknowledged it. The field pair is consumed by the project-info tooling;
/// drawing only uses `create_polylines`.
pub trait CadHost {
    /// Create the given polylines. The engine always passes a single
    /// two-coordinate polyline per call.
    fn create_polylines(&mut self, polylines: &[PolylineData]) -> Result<CommandAck>;

    /// Read a named field value.
    fn field_value(&mut self, field: &str) -> Result<String>;

    /// Write a named field value.
    fn set_field_value(&mut self, field: &str, value: &str) -> Result<CommandAck>;
}

/// Host stub that accepts every command and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCadHost;

impl CadHost for NoOpCadHost {
    fn create_polylines(&mut self, _polylines: &[PolylineData]) -> Result<CommandAck> {
        Ok(CommandAck::default())
    }

    fn field_value(&mut self, _field: &str) -> Result<String> {
        Ok(String::new())
    }

    fn set_field_value(&mut self, _field: &str, _value: &str) -> Result<CommandAck> {
        Ok(CommandAck::default())
    }
}

/// Host double that records every issued command.
///
/// Used by the test suites to assert call ordering, and handy as a dry-run
/// sink when no host is attached.
#[derive(Debug, Default)]
pub struct RecordingCadHost {
    /// One entry per `create_polylines` call, in issue order.
    pub polyline_calls: Vec<Vec<PolylineData>>,
    fields: HashMap<String, String>,
    fail_polylines: bool,
}

impl RecordingCadHost {
    /// A host that acknowledges everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose polyline calls all fail, for exercising the per-call
    /// failure policy.
    pub fn failing() -> Self {
        Self {
            fail_polylines: true,
            ..Self::default()
        }
    }

    /// Number of polyline creation calls issued so far.
    pub fn calls_issued(&self) -> usize {
        self.polyline_calls.len()
    }
}

impl CadHost for RecordingCadHost {
    fn create_polylines(&mut self, polylines: &[PolylineData]) -> Result<CommandAck> {
        if self.fail_polylines {
            return Err(CadError::CommandFailed {
                command: "CreatePolylines".to_string(),
                reason: "simulated host failure".to_string(),
            }
            .into());
        }
        self.polyline_calls.push(polylines.to_vec());
        Ok(CommandAck {
            raw: json!({ "success": true }),
        })
    }

    fn field_value(&mut self, field: &str) -> Result<String> {
        self.fields.get(field).cloned().ok_or_else(|| {
            CadError::FieldNotFound {
                field: field.to_string(),
            }
            .into()
        })
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> Result<CommandAck> {
        self.fields.insert(field.to_string(), value.to_string());
        Ok(CommandAck {
            raw: json!({ "success": true }),
        })
    }
}

//! # SiteKit CAD Link
//!
//! The command boundary to the external CAD host.
//!
//! The host is a blocking request/response surface: create polylines from
//! ordered coordinate lists, and read/write named field values. Responses
//! are opaque JSON acknowledgements. This crate supplies:
//! - The wire types and the [`CadHost`] trait
//! - `NoOpCadHost` (accepts everything, does nothing)
//! - `RecordingCadHost` (captures issued commands, for tests and dry runs)
//! - The drawing orchestrator that issues boundary, closing-edge, setback,
//!   and road-line polylines in contract order

pub mod commands;
pub mod draw;

pub use commands::{CadHost, CommandAck, Coordinate, NoOpCadHost, PolylineData, RecordingCadHost};
pub use draw::{draw_boundary_plan, DrawReport};

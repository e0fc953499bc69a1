//! Drawing orchestration.
//!
//! Issues one blocking polyline call at a time, in strict order: boundary
//! segments in input order, the synthetic closing edge if the path is open,
//! then each segment's offsets in resolver order (for a frontage: front
//! min, front habitable, garage, road). A failed call is logged against its
//! line and the batch continues; nothing is retried.

use crate::commands::{CadHost, PolylineData};
use sitekit_core::SetbackDistances;
use sitekit_survey::{generate_offsets, BoundaryPath, OffsetKind};

/// Accumulated result log of one drawing run.
///
/// The lines are what the results pane shows: per-call outcomes, skip
/// notices, and the text-label no-op, in issue order.
#[derive(Debug, Clone, Default)]
pub struct DrawReport {
    /// Human-readable result lines, in order.
    pub lines: Vec<String>,
    /// Polyline calls acknowledged by the host.
    pub polylines_created: usize,
    /// Polyline calls the host failed.
    pub failures: usize,
}

impl DrawReport {
    fn log(&mut self, line: String) {
        tracing::debug!("{}", line);
        self.lines.push(line);
    }

    /// Whether any host call failed during the run.
    pub fn had_failures(&self) -> bool {
        self.failures > 0
    }
}

/// Draw a full boundary plan: edges, closing edge, setbacks, road lines.
///
/// Per-record parse failures carried by the path are surfaced at the top of
/// the report; zero-length segments are skipped with one notice each, both
/// for their boundary edge and for their offsets.
pub fn draw_boundary_plan(
    host: &mut dyn CadHost,
    path: &BoundaryPath,
    setbacks: &SetbackDistances,
) -> DrawReport {
    let mut report = DrawReport::default();

    for failure in &path.parse_failures {
        report.log(failure.to_string());
    }

    // Boundary edges, in input order.
    for segment in &path.segments {
        if segment.is_zero_length() {
            report.log(format!("Skipping zero-length segment {}.", segment.row()));
            continue;
        }
        let data = PolylineData::segment(segment.start, segment.end);
        send(host, &mut report, data, &format!("Boundary segment {}", segment.row()));
    }

    // Synthetic closing edge, drawing only.
    if let Some((from, to)) = path.closing_edge {
        let data = PolylineData::segment(from, to);
        send(host, &mut report, data, "Closing edge");
    }

    // Offsets, segment by segment in resolver order.
    let run = generate_offsets(path, setbacks);
    for skipped in &run.skipped {
        report.log(skipped.to_string());
    }
    for (segment_index, segment) in path.segments.iter().enumerate() {
        let mut drew_any = false;
        for line in run.lines_for_segment(segment_index) {
            let what = match line.kind {
                OffsetKind::Setback => {
                    format!("{} setback line (segment {})", line.label, segment.row())
                }
                OffsetKind::RoadLine => format!(
                    "Road line at {:.2}m outward (segment {})",
                    line.offset_distance_m,
                    segment.row()
                ),
            };
            let data = PolylineData::segment(line.start, line.end);
            send(host, &mut report, data, &what);
            drew_any = true;
        }
        if drew_any {
            // The host has no text API; surfaced, never silently dropped.
            report.log(format!(
                "Text label not created (segment {}): CAD host does not support text creation.",
                segment.row()
            ));
        }
    }

    report
}

fn send(host: &mut dyn CadHost, report: &mut DrawReport, data: PolylineData, what: &str) {
    match host.create_polylines(std::slice::from_ref(&data)) {
        Ok(ack) => {
            report.polylines_created += 1;
            report.log(format!("{} created. Response: {}", what, ack.raw));
        }
        Err(err) => {
            report.failures += 1;
            tracing::error!("{} failed: {}", what, err);
            report.log(format!("{} failed: {}", what, err));
        }
    }
}

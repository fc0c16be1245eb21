//! Plain-text report of search results.

use std::fmt;

use crate::domain::{SearchState, Segment};
use crate::planner::SearchRequest;

const RULE: &str = "===========================================";

/// Render `routes` found for `request` as a human-readable report.
pub fn render(request: &SearchRequest, routes: &[SearchState]) -> String {
    Report { request, routes }.to_string()
}

struct Report<'a> {
    request: &'a SearchRequest,
    routes: &'a [SearchState],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ROUTE SEARCH RESULTS ===")?;
        writeln!(f, "Departure: {}", self.request.departure)?;
        writeln!(f, "From: {} → To: {}", self.request.start, self.request.end)?;
        writeln!(f)?;

        if self.routes.is_empty() {
            return writeln!(f, "No route found.");
        }

        for (i, route) in self.routes.iter().enumerate() {
            writeln!(f, "{RULE}")?;
            writeln!(f, "ROUTE #{}", i + 1)?;
            writeln!(f, "{RULE}")?;
            write_route(f, route)?;
        }

        Ok(())
    }
}

fn write_route(f: &mut fmt::Formatter<'_>, route: &SearchState) -> fmt::Result {
    let path: Vec<&str> = route.path().iter().map(|n| n.as_str()).collect();
    writeln!(f, "Path: {}", path.join(" → "))?;
    writeln!(f, "Arrival: {}", route.time())?;
    writeln!(
        f,
        "Total time: {:.1} h, travelling: {:.1} h, waiting: {:.1} h",
        route.total_time(),
        route.travel_time(),
        route.wait_time()
    )?;
    writeln!(f, "Total risk: {:.1}", route.risk())?;
    writeln!(f)?;

    writeln!(f, "Segments:")?;
    for (i, segment) in route.segments().iter().enumerate() {
        write_segment(f, i + 1, segment)?;
    }

    let hazards: Vec<_> = route.hazard_segments().collect();
    let waits: Vec<_> = route.waits().collect();

    writeln!(f, "Summary:")?;
    writeln!(f, "  Steps: {}", route.segments().len())?;
    writeln!(f, "  Hazard segments: {}", hazards.len())?;
    for travel in hazards {
        writeln!(
            f,
            "    - {} → {}: {} (+{:.1}, {:.1}x)",
            travel.from,
            travel.to,
            travel.severity.as_deref().unwrap_or_default(),
            travel.risk,
            travel.slowdown
        )?;
    }
    writeln!(f, "  Wait stops: {}", waits.len())?;
    for wait in waits {
        writeln!(
            f,
            "    - at {}: {:.1} h ({} to {})",
            wait.node, wait.duration, wait.start, wait.end
        )?;
    }
    writeln!(f)
}

fn write_segment(f: &mut fmt::Formatter<'_>, step: usize, segment: &Segment) -> fmt::Result {
    let kind = if segment.is_wait() { "Wait" } else { "Travel" };
    writeln!(
        f,
        "Step {step}: {kind} {} → {}",
        segment.from_node(),
        segment.to_node()
    )?;
    writeln!(f, "  Time: {} → {}", segment.start(), segment.end())?;

    match segment {
        Segment::Wait(wait) => writeln!(f, "  Waiting: {:.1} h", wait.duration)?,
        Segment::Travel(travel) => {
            writeln!(
                f,
                "  Travelling: base {:.1} h, actual {:.1} h",
                travel.base_time, travel.actual_time
            )?;
            match &travel.severity {
                Some(severity) => writeln!(
                    f,
                    "     Hazard: {severity}, slowdown {:.1}x, risk {:.1}",
                    travel.slowdown, travel.risk
                )?,
                None => writeln!(f, "     Clear")?,
            }
        }
    }

    writeln!(f)
}

//! Colored console output for solve events.
//!
//! Installs a `tracing` subscriber whose layer prints `solve_start` and
//! `solve_end` events from the solver with colors and grouped numbers.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "shiftforge_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed; keep it.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolveConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solve events with colors.
pub struct SolveConsoleLayer;

impl<S: Subscriber> Layer<S> for SolveConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("shiftforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    outcome: Option<String>,
    variant: Option<String>,
    people: Option<u64>,
    shifts: Option<u64>,
    shift_size: Option<u64>,
    variables: Option<u64>,
    constraints: Option<u64>,
    duration_ms: Option<u64>,
    nodes: Option<u64>,
    failures: Option<u64>,
    backtracks: Option<u64>,
    node_speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "people" => &mut self.people,
            "shifts" => &mut self.shifts,
            "shift_size" => &mut self.shift_size,
            "variables" => &mut self.variables,
            "constraints" => &mut self.constraints,
            "duration_ms" => &mut self.duration_ms,
            "nodes" => &mut self.nodes,
            "failures" => &mut self.failures,
            "backtracks" => &mut self.backtracks,
            "node_speed" => &mut self.node_speed,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "outcome" => self.outcome = Some(value),
            "variant" => self.variant = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format_solve_start(v),
        Some("solve_end") => format_solve_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} people ({}), shifts ({}), shift size ({}), variables ({}), constraints ({}), model ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        count(v.people).bright_yellow(),
        count(v.shifts).bright_yellow(),
        count(v.shift_size).bright_yellow(),
        count(v.variables).bright_yellow(),
        count(v.constraints).bright_yellow(),
        v.variant.as_deref().unwrap_or("?").bright_magenta(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let status = match outcome {
        "solved" => "ROSTER FOUND".bright_green().bold().to_string(),
        "infeasible" => "INFEASIBLE".bright_red().bold().to_string(),
        other => format!("STOPPED ({})", other).yellow().bold().to_string(),
    };

    format!(
        "{} {} {} Solving ended: {} time spent ({}), nodes ({}), failures ({}), backtracks ({}), node speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        status,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes).white(),
        count(v.failures).white(),
        count(v.backtracks).white(),
        count(v.node_speed).white(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

//! Colorful console output for constraint violations.
//!
//! Provides a custom `tracing` layer that formats SafeStr events with colors.
//!
//! ## Log Levels
//!
//! - **WARN**: Constraint violations from `LoggingHandler`
//! - **TRACE**: Scan outcomes from the public operations

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Initializes console output for SafeStr events.
///
/// Safe to call multiple times - only the first call has effect. The filter
/// defaults to `warn` and honors `RUST_LOG`.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ViolationConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats SafeStr events with colors.
pub struct ViolationConsoleLayer;

impl<S: Subscriber> Layer<S> for ViolationConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("safestr") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    operation: Option<String>,
    condition: Option<String>,
    kind: Option<String>,
    found: Option<bool>,
    member: Option<bool>,
    count: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_str(field, &s);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "count" {
            self.count = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "found" => self.found = Some(value),
            "member" => self.member = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "operation" => self.operation = Some(value.to_string()),
            "condition" => self.condition = Some(value.to_string()),
            "kind" => self.kind = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "constraint_violation" => format_violation(v),
        "scan" => format_scan(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_violation(v: &EventVisitor) -> String {
    let operation = v.operation.as_deref().unwrap_or("unknown");
    let condition = v.condition.as_deref().unwrap_or("");
    let kind = v.kind.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {}: {} │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        operation.white().bold(),
        condition.bright_red(),
        kind.yellow()
    )
}

fn format_scan(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let operation = v.operation.as_deref().unwrap_or("unknown");
    let outcome = if let Some(count) = v.count {
        format!("count {}", count).white().to_string()
    } else if let Some(found) = v.found {
        if found {
            "found".bright_green().to_string()
        } else {
            "not found".yellow().to_string()
        }
    } else if let Some(member) = v.member {
        if member {
            "true".bright_green().to_string()
        } else {
            "false".yellow().to_string()
        }
    } else {
        String::new()
    };

    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        "·".bright_black(),
        operation.bright_black(),
        outcome
    )
}

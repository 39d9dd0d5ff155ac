//! Colorful console output for criteria engine events.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Registry loading, analysed criteria lines
//! - **DEBUG**: Combination attempts and merged classes
//! - **WARN**: Class pairs that cannot be merged, skipped tokens

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

#[cfg(feature = "verbose-logging")]
const DEFAULT_DIRECTIVE: &str = "cohortforge_engine=debug";
#[cfg(not(feature = "verbose-logging"))]
const DEFAULT_DIRECTIVE: &str = "cohortforge_engine=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the CohortForge banner and sets up tracing. `RUST_LOG` overrides
/// the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CohortConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  ____      _                _   _____
 / ___|___ | |__   ___  _ __| |_|  ___|__  _ __ __ _  ___
| |   / _ \| '_ \ / _ \| '__| __| |_ / _ \| '__/ _` |/ _ \
| |__| (_) | | | | (_) | |  | |_|  _| (_) | | | (_| |  __/
 \____\___/|_| |_|\___/|_|   \__|_|  \___/|_|  \__, |\___|
                                               |___/
"#;

    let version_line = format!(
        "                   v{} - Student Cohort Criteria Engine\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats criteria engine events with colors.
pub struct CohortConsoleLayer;

impl<S: Subscriber> Layer<S> for CohortConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("cohortforge_engine") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    class: Option<String>,
    first: Option<String>,
    second: Option<String>,
    criteria: Option<String>,
    reason: Option<String>,
    line: Option<String>,
    canonical_count: Option<u64>,
    composite_count: Option<u64>,
    rand: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "canonical_count" => self.canonical_count = Some(value),
            "composite_count" => self.composite_count = Some(value),
            "rand" => self.rand = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "class" => self.class = value,
            "first" => self.first = value,
            "second" => self.second = value,
            "criteria" => self.criteria = value,
            "reason" => self.reason = value,
            "line" => self.line = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "registry_loaded" => format_registry_loaded(v),
        "criteria_analysed" => format_analysed(v),
        "criteria_combined" => format_combined(v),
        "combine_skipped" => format_skipped(v, level),
        "criteria_accepted" => format_accepted(v),
        _ => String::new(),
    }
}

fn format_registry_loaded(v: &EventVisitor) -> String {
    let count = v.canonical_count.unwrap_or(0);
    format!(
        "{} Registry loaded │ {} canonical classes",
        "●".bright_green().bold(),
        count.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_analysed(v: &EventVisitor) -> String {
    let line = v.line.as_deref().unwrap_or("");
    let composites = v.composite_count.unwrap_or(0);
    format!(
        "{} Criteria {} │ {} composite classes",
        "■".bright_cyan().bold(),
        format_line(line),
        composites.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_combined(v: &EventVisitor) -> String {
    let class = v.class.as_deref().unwrap_or("?");
    let criteria = v.criteria.as_deref().unwrap_or("");
    format!(
        "{} Combined {} │ {}",
        "⊕".bright_magenta().bold(),
        class.white().bold(),
        criteria.bright_black()
    )
}

fn format_skipped(v: &EventVisitor, level: Level) -> String {
    if level > Level::WARN {
        return String::new();
    }
    let first = v.first.as_deref().unwrap_or("?");
    let second = v.second.as_deref().unwrap_or("-");
    let reason = v.reason.as_deref().unwrap_or("");
    format!(
        "{} Skipped {} + {} │ {}",
        "✗".bright_red(),
        first.white(),
        second.white(),
        reason.yellow()
    )
}

fn format_accepted(v: &EventVisitor) -> String {
    match v.rand {
        Some(rand) => format!(
            "{} Accepted │ {} unassigned",
            "✓".bright_green(),
            rand.to_formatted_string(&Locale::en).bright_yellow()
        ),
        None => format!("{} Accepted │ no total", "✓".bright_green()),
    }
}

// Colors counts yellow and class names white, e.g. `10S3A2B`.
fn format_line(line: &str) -> String {
    let mut out = String::new();
    let mut digits = String::new();
    for c in line.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            if !digits.is_empty() {
                out.push_str(&digits.bright_yellow().to_string());
                digits.clear();
            }
            out.push_str(&c.white().bold().to_string());
        }
    }
    if !digits.is_empty() {
        out.push_str(&digits.bright_yellow().to_string());
    }
    out
}

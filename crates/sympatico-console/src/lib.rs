//! Colorful console output for compatibility scoring.
//!
//! Provides a custom `tracing` layer that formats scoring events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: One line per scored match
//! - **WARN**: Dangerous gaps on critical virtues
//! - **DEBUG**: Per-virtue verdicts
//! - **TRACE**: Scores replaced by the neutral midpoint

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use sympatico_core::{get_virtue_by_id, Verdict};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVES: &str = "sympatico_scoring=info";

/// Initializes the scoring console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. If another global subscriber is
/// already installed, it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CompatibilityConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let version_line = format!("Sympatico v{} - Virtue Compatibility Engine", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_magenta().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats scoring events with colors.
pub struct CompatibilityConsoleLayer;

impl<S: Subscriber> Layer<S> for CompatibilityConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("sympatico") {
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
    virtue: Option<String>,
    side: Option<String>,
    verdict: Option<String>,
    delta: Option<f64>,
    neutral: Option<f64>,
    overall_score: Option<f64>,
    danger_count: Option<u64>,
    friction_count: Option<u64>,
    sympatico_count: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "virtue" => self.virtue = value,
            "side" => self.side = value,
            "verdict" => self.verdict = value,
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "delta" => self.delta = Some(value),
            "neutral" => self.neutral = Some(value),
            "overall_score" => self.overall_score = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "danger_count" => self.danger_count = Some(value),
            "friction_count" => self.friction_count = Some(value),
            "sympatico_count" => self.sympatico_count = Some(value),
            _ => self.record_f64(field, value as f64),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "virtue_scored" => format_virtue_scored(v),
        "match_scored" => format_match_scored(v),
        "critical_issue" => format_critical_issue(v),
        "score_defaulted" => format_score_defaulted(v, level),
        _ => String::new(),
    }
}

fn format_timestamp() -> String {
    chrono::Local::now()
        .format("%H:%M:%S%.3f")
        .to_string()
        .bright_black()
        .to_string()
}

// Registry display name, falling back to the raw id.
fn virtue_name(v: &EventVisitor) -> String {
    let id = v.virtue.as_deref().unwrap_or("unknown");
    get_virtue_by_id(id)
        .map(|def| def.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

fn format_verdict(verdict: &str) -> String {
    match verdict.parse::<Verdict>() {
        Ok(Verdict::Sympatico) => Verdict::Sympatico.label().bright_green().to_string(),
        Ok(Verdict::Friction) => Verdict::Friction.label().yellow().to_string(),
        Ok(Verdict::Danger) => Verdict::Danger.label().bright_red().bold().to_string(),
        Err(_) => verdict.white().to_string(),
    }
}

fn format_virtue_scored(v: &EventVisitor) -> String {
    let delta = v.delta.unwrap_or(0.0);
    let verdict = v.verdict.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {:<12} │ Δ {:>3.0} │ {}",
        format_timestamp(),
        "·".bright_black(),
        virtue_name(v).white(),
        delta,
        format_verdict(verdict)
    )
}

fn format_match_scored(v: &EventVisitor) -> String {
    let score = v.overall_score.unwrap_or(0.0);
    let danger = v.danger_count.unwrap_or(0);
    let friction = v.friction_count.unwrap_or(0);
    let sympatico = v.sympatico_count.unwrap_or(0);

    format!(
        "{} {} Match scored │ {} │ {} sympatico │ {} friction │ {} danger",
        format_timestamp(),
        "■".bright_cyan().bold(),
        format_score(score),
        sympatico.bright_green(),
        friction.yellow(),
        if danger > 0 {
            danger.bright_red().bold().to_string()
        } else {
            danger.white().to_string()
        }
    )
}

fn format_critical_issue(v: &EventVisitor) -> String {
    let delta = v.delta.unwrap_or(0.0);

    format!(
        "{} {} CRITICAL │ {} │ {:.0}-point gap",
        format_timestamp(),
        "⚠".bright_red().bold(),
        virtue_name(v).bright_red().bold(),
        delta
    )
}

fn format_score_defaulted(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let side = v.side.as_deref().unwrap_or("?");
    let neutral = v.neutral.unwrap_or(0.0);

    format!(
        "{} {} {} score missing for {} │ using {:.0}",
        format_timestamp(),
        "∅".bright_black(),
        side.bright_black(),
        virtue_name(v).bright_black(),
        neutral
    )
}

fn format_score(score: f64) -> String {
    let text = format!("{:.0}%", score);
    if score >= 75.0 {
        text.bright_green().bold().to_string()
    } else if score >= 50.0 {
        text.yellow().bold().to_string()
    } else {
        text.bright_red().bold().to_string()
    }
}

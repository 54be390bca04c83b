//! Terminal rendering for CLI commands.
//!
//! Human mode prints indented, colored lines. `--json` turns every line into
//! a `{"type": ..., "payload": ...}` object on stdout, and `--quiet` drops
//! everything except errors and explicit JSON documents.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Global `--json` / `--quiet` switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static MODE: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn mode() -> OutputConfig {
    let cell = MODE.get_or_init(RwLock::default);
    match cell.read() {
        Ok(mode) => *mode,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Install the mode chosen on the command line.
pub fn configure(config: OutputConfig) {
    let cell = MODE.get_or_init(RwLock::default);
    match cell.write() {
        Ok(mut mode) => *mode = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

#[must_use]
pub fn is_quiet() -> bool {
    mode().quiet
}

/// Print one typed JSON line.
pub fn emit_json_line(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Print a raw JSON document.
pub fn json_output(value: Value) {
    println!("{value}");
}

fn emit(kind: &str, payload: impl FnOnce() -> Value, render: impl FnOnce()) {
    let mode = mode();
    if mode.json {
        emit_json_line(kind, payload());
    } else if !mode.quiet {
        render();
    }
}

pub fn header(version: &str) {
    emit(
        "header",
        || json!({ "app": "edgescan", "version": version }),
        || println!("{} {}\n", "edgescan".bold(), version.dimmed()),
    );
}

pub fn section(title: &str) {
    emit(
        "section",
        || json!({ "title": title }),
        || println!("\n{}", title.bold()),
    );
}

/// Print a `label value` pair, labels padded to one column.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        || json!({ "label": label, "value": value }),
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit(
        "success",
        || json!({ "message": message }),
        || println!("  {} {}", "✓".green(), message),
    );
}

pub fn note(message: &str) {
    emit(
        "note",
        || json!({ "message": message }),
        || println!("  {}", message.dimmed()),
    );
}

pub fn hint(message: &str) {
    emit(
        "hint",
        || json!({ "message": message }),
        || println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed()),
    );
}

/// Print a preformatted block, one indented line at a time.
pub fn lines(content: &str) {
    emit(
        "lines",
        || json!({ "content": content }),
        || content.lines().for_each(|line| println!("  {line}")),
    );
}

/// Stream one opportunity found by `watch`.
pub fn opportunity(timestamp: &str, message: &str) {
    emit(
        "opportunity",
        || json!({ "timestamp": timestamp, "message": message }),
        || println!("  {} {} {}", timestamp.dimmed(), "opportunity".yellow(), message),
    );
}

/// Errors go to stderr and ignore `--quiet`.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Green in human mode, plain in JSON mode.
pub fn positive(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.green().to_string()
    }
}

/// Cyan in human mode, plain in JSON mode.
pub fn highlight(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.cyan().to_string()
    }
}

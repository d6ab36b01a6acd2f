//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde_json::json;

use userforge_core::domain::{User, ValidationError};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format` in the config file; when
    /// both say `auto` the format follows whether stdout is a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Entities ──────────────────────────────────────────────────────────

    /// Print a user in the resolved format.
    ///
    /// JSON is written even in quiet mode so scripts can capture it.
    pub fn user(&self, user: &User) -> io::Result<()> {
        match self.resolved_format {
            OutputFormat::Json => self.term.write_line(&render_user_json(user)?),
            _ => {
                if self.quiet {
                    return Ok(());
                }
                for line in render_user_lines(user) {
                    self.term.write_line(&line)?;
                }
                Ok(())
            }
        }
    }

    /// Print the outcome of a validation run: `valid`, or one `✗` line per
    /// violation.
    pub fn validation_report(&self, result: &Result<(), ValidationError>) -> io::Result<()> {
        match self.resolved_format {
            OutputFormat::Json => self.term.write_line(&render_report_json(result)?),
            _ => match result {
                Ok(()) => self.success("valid"),
                Err(err) => {
                    for violation in err.violations() {
                        self.error(&format!("{}: {violation}", violation.field()))?;
                    }
                    Ok(())
                }
            },
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    #[cfg(test)]
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    #[cfg(test)]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    #[cfg(test)]
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── Renderers ─────────────────────────────────────────────────────────────────

/// One `label: value` line per set field, headed by the display summary.
fn render_user_lines(user: &User) -> Vec<String> {
    let mut lines = vec![user.to_string()];

    let mut push = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(format!("  {label:<11}{value}"));
        }
    };

    push("id:", user.id().map(|v| v.to_string()));
    push("username:", user.username().map(str::to_owned));
    push("email:", user.email().map(str::to_owned));
    push("age:", user.age().map(|v| v.to_string()));
    push("phone:", user.phone().map(str::to_owned));
    push("address:", user.address().map(str::to_owned));
    push("city:", user.city().map(str::to_owned));
    push("country:", user.country().map(str::to_owned));
    push("active:", user.active().map(|v| v.to_string()));
    push("department:", user.department().map(str::to_owned));
    push("position:", user.position().map(str::to_owned));

    lines
}

fn render_user_json(user: &User) -> io::Result<String> {
    serde_json::to_string_pretty(user).map_err(io::Error::other)
}

fn render_report_json(result: &Result<(), ValidationError>) -> io::Result<String> {
    let violations: Vec<_> = match result {
        Ok(()) => Vec::new(),
        Err(err) => err
            .violations()
            .iter()
            .map(|v| json!({ "field": v.field(), "message": v.to_string() }))
            .collect(),
    };

    let report = json!({
        "valid": result.is_ok(),
        "violations": violations,
    });
    serde_json::to_string_pretty(&report).map_err(io::Error::other)
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "userforge",
    bin_name = "userforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Build immutable users from loose input, then validate them",
    long_about = "userforge converts user DTOs (flags or JSON files) into \
                  immutable entities through a builder and checks the key \
                  fields (username, email).",
    after_help = "EXAMPLES:\n\
        \x20 userforge create --username alice --email alice@example.com\n\
        \x20 userforge create --from user.json --mode builder\n\
        \x20 userforge update --existing alice.json --city Lisbon\n\
        \x20 userforge validate --email invalid\n\
        \x20 userforge demo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build and validate a new user.
    #[command(
        visible_alias = "c",
        about = "Create a user from a DTO",
        after_help = "EXAMPLES:\n\
            \x20 userforge create --username alice --email alice@example.com --age 30\n\
            \x20 userforge create --from user.json\n\
            \x20 userforge create --from user.json --mode builder --output-format json"
    )]
    Create(CreateArgs),

    /// Apply a DTO on top of an existing user.
    #[command(
        visible_alias = "u",
        about = "Update an existing user",
        after_help = "EXAMPLES:\n\
            \x20 userforge update --existing alice.json --email alice@new.example\n\
            \x20 userforge update --existing alice.json --from patch.json"
    )]
    Update(UpdateArgs),

    /// Check the key fields without printing the entity.
    #[command(
        about = "Validate a DTO",
        after_help = "EXAMPLES:\n\
            \x20 userforge validate --username alice --email alice@example.com\n\
            \x20 userforge validate --from user.json"
    )]
    Validate(ValidateArgs),

    /// Walk through the builder and validator with canned data.
    #[command(about = "Run the built-in walkthrough")]
    Demo,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 userforge init           # default location\n\
            \x20 userforge init --local   # ./.userforge.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 userforge completions bash > ~/.local/share/bash-completion/completions/userforge\n\
            \x20 userforge completions zsh  > ~/.zfunc/_userforge"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 userforge config get defaults.city\n\
            \x20 userforge config list"
    )]
    Config(ConfigCommands),
}

// ── user fields ───────────────────────────────────────────────────────────────

/// One flag per DTO field. Flags override values read with `--from`.
#[derive(Debug, Clone, Default, Args)]
pub struct UserFieldArgs {
    /// Read the DTO from a JSON file first.
    #[arg(long = "from", value_name = "FILE", help = "JSON file holding a user DTO")]
    pub from: Option<PathBuf>,

    #[arg(long, value_name = "NAME", help = "Username (key field)")]
    pub username: Option<String>,

    #[arg(long, value_name = "ADDRESS", help = "Email (key field)")]
    pub email: Option<String>,

    #[arg(long, value_name = "YEARS", allow_negative_numbers = true)]
    pub age: Option<i32>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub position: Option<String>,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `userforge create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub fields: UserFieldArgs,

    /// Conversion workflow.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value = "direct",
        help = "direct: copy the DTO as-is; builder: also stamp configured defaults"
    )]
    pub mode: CreateMode,
}

/// Which service workflow `create` runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CreateMode {
    #[default]
    Direct,
    Builder,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `userforge update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// The user to start from (JSON, as printed by `create --output-format json`).
    #[arg(long = "existing", value_name = "FILE", help = "JSON file holding the existing user")]
    pub existing: PathBuf,

    #[command(flatten)]
    pub fields: UserFieldArgs,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `userforge validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: UserFieldArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `userforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.userforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `userforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `userforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.city`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

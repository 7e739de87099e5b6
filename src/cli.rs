//! CLI argument parsing for the renderer.
//!
//! The CLI is thin: it builds a renderer from config and prints what the
//! library returns, one line per result or a JSON document.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "arender",
    version,
    about = "Render activity parameters as localized text or markup",
    after_help = "Examples:\n  arender format --param /docs/a.txt --param bob --type 0=file --type 1=username --strip-path --highlight\n  arender format --module files --subject shared_with_by --param /docs/a.txt --param bob\n  arender join --item-type file --item A/B.txt --item C/D.txt --strip-path --lang de\n  arender subject --module files --subject shared_link_self --param /docs/a.txt\n  arender classify --module files --subject shared_group_self --json\n  arender types --filter shares",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Engine config JSON (defaults to the per-user config file when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured language
    #[arg(long, global = true, value_name = "LANG")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Format(FormatArgs),
    Join(JoinArgs),
    Subject(SubjectArgs),
    Classify(ClassifyArgs),
    Types(TypesArgs),
}

/// Flags shared by every rendering command.
#[derive(Args, Debug, Clone, Copy)]
pub struct FlagArgs {
    /// Show files by basename with the folder as tooltip
    #[arg(long)]
    pub strip_path: bool,

    /// Emit markup instead of plain text
    #[arg(long)]
    pub highlight: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Render each parameter of one activity")]
pub struct FormatArgs {
    /// Parameter value, in order (repeatable)
    #[arg(long = "param", value_name = "VALUE", allow_hyphen_values = true)]
    pub params: Vec<String>,

    /// Explicit classification as POS=TYPE (file, username)
    #[arg(long = "type", value_name = "POS=TYPE", conflicts_with = "module")]
    pub types: Vec<String>,

    /// Classify through the registered extensions instead
    #[arg(long, requires = "subject")]
    pub module: Option<String>,

    #[arg(long, requires = "module")]
    pub subject: Option<String>,

    #[command(flatten)]
    pub flags: FlagArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Join several values into one localized list")]
pub struct JoinArgs {
    /// Item value, in order (repeatable)
    #[arg(long = "item", value_name = "VALUE", allow_hyphen_values = true)]
    pub items: Vec<String>,

    /// Type shared by every item (file, username); plain text when omitted
    #[arg(long, value_name = "TYPE", default_value = "")]
    pub item_type: String,

    #[command(flatten)]
    pub flags: FlagArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Render the full sentence of an activity subject")]
pub struct SubjectArgs {
    #[arg(long)]
    pub module: String,

    #[arg(long)]
    pub subject: String,

    /// Parameter value, in order (repeatable)
    #[arg(long = "param", value_name = "VALUE", allow_hyphen_values = true)]
    pub params: Vec<String>,

    #[command(flatten)]
    pub flags: FlagArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Show the parameter classification for a subject")]
pub struct ClassifyArgs {
    #[arg(long)]
    pub module: String,

    #[arg(long)]
    pub subject: String,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "List notification types with icon and description")]
pub struct TypesArgs {
    /// Only the types an activity filter selects (e.g. shares)
    #[arg(long, value_name = "FILTER")]
    pub filter: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

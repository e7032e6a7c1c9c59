//! wstag: tag i3 workspaces with symbols.
//!
//! # Usage
//!
//! ```text
//! wstag --list-tags
//! wstag [--num N] --add-tags <tag>...
//! wstag [--num N] --remove-tags <tag>...
//! wstag [--num N] --set-tags <tag>...
//! wstag [--num N] --string-tags <string>
//! wstag [--num N] --clear-tags
//! wstag [--num N] [--auto-tags]
//! ```
//!
//! Without `--num` the focused workspace is tagged. Without a mode flag the
//! tags are inferred from the workspace's windows.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};

use wstag_mutator::{Operation, Target};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "wstag",
    version,
    about = "Add tags to an i3 workspace",
    long_about = None,
    group(
        ArgGroup::new("mode")
            .args([
                "list_tags",
                "clear_tags",
                "add_tags",
                "remove_tags",
                "set_tags",
                "string_tags",
                "auto_tags",
            ])
            .multiple(false)
    ),
)]
struct Cli {
    /// The workspace to tag (defaults to the focused one).
    #[arg(long, value_name = "NUM", allow_negative_numbers = true)]
    num: Option<i32>,

    /// Read settings from this file instead of ~/.config/wstag/config.yaml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Character between the workspace number and its symbols.
    #[arg(long, value_name = "CHAR")]
    separator: Option<char>,

    /// Drop the workspace number from tagged names.
    #[arg(long, overrides_with = "no_compressed")]
    compressed: bool,

    /// Keep the workspace number even if the config enables compression.
    #[arg(long, overrides_with = "compressed")]
    no_compressed: bool,

    /// Print the new name without renaming the workspace.
    #[arg(long)]
    dry_run: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// List all known tags.
    #[arg(long)]
    list_tags: bool,

    /// Clear all tags.
    #[arg(long)]
    clear_tags: bool,

    /// Add tags to the workspace.
    #[arg(long, value_name = "TAG", num_args = 1..)]
    add_tags: Option<Vec<String>>,

    /// Remove tags from the workspace.
    #[arg(long, value_name = "TAG", num_args = 1..)]
    remove_tags: Option<Vec<String>>,

    /// Replace the workspace's tags.
    #[arg(long, value_name = "TAG", num_args = 1..)]
    set_tags: Option<Vec<String>>,

    /// Append an arbitrary string as a single tag.
    #[arg(long, value_name = "STRING")]
    string_tags: Option<String>,

    /// Infer tags from the windows on the workspace (default).
    #[arg(long)]
    auto_tags: bool,
}

/// What one invocation does.
#[derive(Debug)]
enum Mode {
    List,
    Mutate(Operation),
}

impl Cli {
    fn mode(&mut self) -> Mode {
        if self.list_tags {
            return Mode::List;
        }
        let op = if self.clear_tags {
            Operation::Clear
        } else if let Some(tags) = self.add_tags.take() {
            Operation::Add(tags)
        } else if let Some(tags) = self.remove_tags.take() {
            Operation::Remove(tags)
        } else if let Some(tags) = self.set_tags.take() {
            Operation::Set(tags)
        } else if let Some(raw) = self.string_tags.take() {
            Operation::Raw(raw)
        } else {
            Operation::Auto
        };
        Mode::Mutate(op)
    }

    /// `None` leaves the config value alone.
    fn compressed(&self) -> Option<bool> {
        match (self.compressed, self.no_compressed) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn target(&self) -> Target {
        self.num.map_or(Target::Focused, Target::Number)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings =
        commands::Settings::load(cli.config.as_deref(), cli.separator, cli.compressed())?;

    match cli.mode() {
        Mode::List => commands::list::run(&settings),
        Mode::Mutate(op) => commands::tag::run(&settings, cli.target(), op, cli.dry_run),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wstag").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn no_mode_means_auto_on_focused() {
        let mut cli = parse(&[]);
        assert!(matches!(cli.mode(), Mode::Mutate(Operation::Auto)));
        assert_eq!(cli.target(), Target::Focused);
    }

    #[test]
    fn add_tags_take_several_values() {
        let mut cli = parse(&["--num", "3", "--add-tags", "mail", "web"]);
        assert_eq!(cli.target(), Target::Number(3));
        match cli.mode() {
            Mode::Mutate(Operation::Add(tags)) => assert_eq!(tags, vec!["mail", "web"]),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn negative_workspace_number() {
        let cli = parse(&["--num", "-1", "--clear-tags"]);
        assert_eq!(cli.target(), Target::Number(-1));
    }

    #[test]
    fn modes_are_exclusive() {
        let err = Cli::try_parse_from(["wstag", "--clear-tags", "--auto-tags"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn separator_is_a_single_char() {
        assert!(Cli::try_parse_from(["wstag", "--separator", "::", "--list-tags"]).is_err());
        let cli = parse(&["--separator", ":", "--list-tags"]);
        assert_eq!(cli.separator, Some(':'));
    }

    #[test]
    fn compression_flags_last_one_wins() {
        assert_eq!(parse(&["--list-tags"]).compressed(), None);
        assert_eq!(parse(&["--compressed", "--list-tags"]).compressed(), Some(true));
        assert_eq!(parse(&["--no-compressed", "--list-tags"]).compressed(), Some(false));
        let cli = parse(&["--compressed", "--no-compressed", "--list-tags"]);
        assert_eq!(cli.compressed(), Some(false));
        let cli = parse(&["--no-compressed", "--compressed", "--list-tags"]);
        assert_eq!(cli.compressed(), Some(true));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

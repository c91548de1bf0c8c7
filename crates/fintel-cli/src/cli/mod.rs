use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fintel` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fintel",
    version,
    about = "Franchise Intel - browse, collect and compare franchise opportunities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AuthCommands, CollectionCommands, CompareCommands};
    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "fintel", "--format", "table", "--limit", "10", "--verbose", "insights",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Insights));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fintel", "home", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Home(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["fintel", "--format", "xml", "home"]).is_err());
    }

    #[test]
    fn browse_collects_filters() {
        let cli = Cli::try_parse_from([
            "fintel", "browse", "--search", "pizza", "--sector", "food-beverage", "--sort",
            "profit",
        ])
        .expect("cli should parse");

        let Commands::Browse(args) = cli.command else {
            panic!("expected browse");
        };
        assert_eq!(args.search.as_deref(), Some("pizza"));
        assert_eq!(args.sector.as_deref(), Some("food-beverage"));
        assert_eq!(args.sort, "profit");
    }

    #[test]
    fn browse_sort_defaults_to_name() {
        let cli = Cli::try_parse_from(["fintel", "browse"]).expect("cli should parse");
        let Commands::Browse(args) = cli.command else {
            panic!("expected browse");
        };
        assert_eq!(args.sort, "name");
        assert_eq!(args.search, None);
    }

    #[test]
    fn collection_add_takes_two_ids() {
        let cli = Cli::try_parse_from(["fintel", "collection", "add", "col-1", "brd-1"])
            .expect("cli should parse");
        let Commands::Collection { action } = cli.command else {
            panic!("expected collection");
        };
        assert!(matches!(
            action,
            CollectionCommands::Add(args) if args.collection_id == "col-1" && args.brand_id == "brd-1"
        ));
    }

    #[test]
    fn compare_create_notes_default_empty() {
        let cli = Cli::try_parse_from(["fintel", "compare", "create", "brd-a", "brd-b"])
            .expect("cli should parse");
        let Commands::Compare { action } = cli.command else {
            panic!("expected compare");
        };
        let CompareCommands::Create(args) = action else {
            panic!("expected create");
        };
        assert_eq!(args.notes, "");
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["fintel", "ask", "what", "is", "a", "good", "ROI?"])
            .expect("cli should parse");
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.question(), Some("what is a good ROI?".to_string()));
    }

    #[test]
    fn auth_login_password_is_optional() {
        let cli = Cli::try_parse_from(["fintel", "auth", "login", "--email", "a@b.co"])
            .expect("cli should parse");
        let Commands::Auth { action } = cli.command else {
            panic!("expected auth");
        };
        assert!(matches!(action, AuthCommands::Login(args) if args.password.is_none()));
    }

    #[test]
    fn color_flag_parses() {
        let cli = Cli::try_parse_from(["fintel", "--color", "never", "doctor"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().color, ColorMode::Never);
    }
}

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `qn` binary.
#[derive(Debug, Parser)]
#[command(name = "qn", version, about = "Quest Nexus - gamified classroom session and navigation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Spinners while waiting on the auth service: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use qn_core::enums::Role;

    use super::subcommands::{AuthCommands, ViewCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["qn", "--format", "table", "--verbose", "shell"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["qn", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["qn", "--format", "xml", "shell"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_defaults_to_student_role() {
        let cli = Cli::try_parse_from([
            "qn",
            "auth",
            "login",
            "--email",
            "bob@school.edu",
            "--password",
            "pw",
        ])
        .expect("cli should parse");

        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.role, Role::Student);
        assert_eq!(args.email, "bob@school.edu");
    }

    #[test]
    fn register_parses_role_case_insensitively() {
        let cli = Cli::try_parse_from([
            "qn",
            "auth",
            "register",
            "--email",
            "ana@school.edu",
            "--password",
            "pw",
            "--name",
            "Ana García",
            "--role",
            "Teacher",
        ])
        .expect("cli should parse");

        let Commands::Auth {
            action: AuthCommands::Register(args),
        } = cli.command
        else {
            panic!("expected auth register");
        };
        assert_eq!(args.role, Role::Teacher);
        assert_eq!(args.name, "Ana García");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = Cli::try_parse_from([
            "qn", "auth", "login", "--email", "a@x", "--password", "pw", "--role", "admin",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn view_show_tag_is_optional() {
        let cli = Cli::try_parse_from(["qn", "view", "show"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::View {
                action: ViewCommands::Show(ref args)
            } if args.tag.is_none()
        ));

        let cli = Cli::try_parse_from(["qn", "view", "show", "create-class"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::View {
                action: ViewCommands::Show(ref args)
            } if args.tag.as_deref() == Some("create-class")
        ));
    }

    #[test]
    fn view_menu_accepts_current() {
        let cli = Cli::try_parse_from(["qn", "view", "menu", "--current", "groups"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::View {
                action: ViewCommands::Menu(ref args)
            } if args.current.as_deref() == Some("groups")
        ));
    }
}

//! Command-line interface for storefront.
//!
//! This module provides the CLI structure for the `storefront` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, AdminCommand, BrowseCommand, CategoriesCommand, ConfigCommand, EditCommand,
    OutputFormat, ShowCommand,
};

/// storefront - Browse and manage a clothing catalog
///
/// A terminal storefront and admin console for a clothing catalog REST API.
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog API base URL (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the product grid, optionally filtered
    Browse(BrowseCommand),

    /// List the catalog's categories
    Categories(CategoriesCommand),

    /// Show one product in detail
    Show(ShowCommand),

    /// Manage products
    #[command(subcommand)]
    Admin(AdminCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            base_url: None,
            verbose,
            quiet,
            command: Command::Categories(CategoriesCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "storefront");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_browse_filters() {
        let cli = Cli::try_parse_from([
            "storefront",
            "browse",
            "--category",
            "Shirts",
            "--color",
            "Blue",
        ])
        .unwrap();
        let Command::Browse(browse) = cli.command else {
            panic!("expected browse");
        };
        assert_eq!(browse.category.as_deref(), Some("Shirts"));
        assert!(browse.size.is_none());
        assert_eq!(browse.format, OutputFormat::Plain);
    }

    #[test]
    fn test_parse_browse_clear_conflicts_with_filters() {
        let result =
            Cli::try_parse_from(["storefront", "browse", "--clear", "--size", "M"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["storefront", "show", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Show(ShowCommand { id: 4 })));
    }

    #[test]
    fn test_parse_admin_add() {
        let cli = Cli::try_parse_from([
            "storefront",
            "admin",
            "add",
            "--name",
            "T",
            "--category",
            "Shirts",
            "--price",
            "19.99",
            "--size",
            "M",
            "--color",
            "Blue",
        ])
        .unwrap();
        let Command::Admin(AdminCommand::Add(add)) = cli.command else {
            panic!("expected admin add");
        };
        assert_eq!(add.price, "19.99");
        assert_eq!(add.stock, "0");
        assert_eq!(add.description, "");
    }

    #[test]
    fn test_parse_admin_add_requires_name() {
        let result = Cli::try_parse_from([
            "storefront",
            "admin",
            "add",
            "--category",
            "Shirts",
            "--price",
            "1",
            "--size",
            "M",
            "--color",
            "Blue",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_admin_edit() {
        let cli =
            Cli::try_parse_from(["storefront", "admin", "edit", "3", "--stock", "12"]).unwrap();
        let Command::Admin(AdminCommand::Edit(edit)) = cli.command else {
            panic!("expected admin edit");
        };
        assert_eq!(edit.id, 3);
        assert_eq!(edit.stock.as_deref(), Some("12"));
        assert!(edit.name.is_none());
    }

    #[test]
    fn test_parse_admin_delete() {
        let cli = Cli::try_parse_from(["storefront", "admin", "delete", "2", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Admin(AdminCommand::Delete { id: 2, yes: true })
        ));
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "storefront",
            "-v",
            "--base-url",
            "http://shop.test/api/clothing",
            "-c",
            "/custom/config.toml",
            "categories",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(
            cli.base_url.as_deref(),
            Some("http://shop.test/api/clothing")
        );
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}

//! `storefront` - CLI for the clothing catalog
//!
//! This binary browses the catalog like a shopper would and manages its
//! products like an administrator would, against a running catalog API.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use storefront::cli::{AdminCommand, BrowseCommand, Cli, Command, ConfigCommand, OutputFormat};
use storefront::{
    init_logging, AdminConsole, CatalogApi, CatalogBrowser, Config, HttpCatalog, ListView,
    Renderer, TerminalPrompt,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("applying --base-url")?;
    }

    let renderer = Renderer::new(config.display.clone());

    // Execute the command
    match cli.command {
        Command::Browse(browse_cmd) => {
            let api = HttpCatalog::from_config(&config.api)?;
            handle_browse(api, renderer, &browse_cmd).await
        }
        Command::Categories(categories_cmd) => {
            let api = HttpCatalog::from_config(&config.api)?;
            handle_categories(&api, categories_cmd.json).await
        }
        Command::Show(show_cmd) => {
            let api = HttpCatalog::from_config(&config.api)?;
            let mut browser = CatalogBrowser::new(api, renderer);
            match browser.show_product_detail(show_cmd.id).await {
                Some(detail) => {
                    print!("{detail}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("Product {} could not be loaded.", show_cmd.id);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Admin(admin_cmd) => {
            let api = HttpCatalog::from_config(&config.api)?;
            handle_admin(api, renderer, admin_cmd).await
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_browse(
    api: HttpCatalog,
    renderer: Renderer,
    cmd: &BrowseCommand,
) -> anyhow::Result<ExitCode> {
    let mut browser = CatalogBrowser::new(api, renderer);

    if cmd.clear {
        browser.clear_filters().await;
    } else {
        *browser.controls_mut() = cmd.controls();
        browser.apply_filters().await;
    }

    if let ListView::Failed(message) = browser.grid() {
        eprintln!("{message}");
        return Ok(ExitCode::FAILURE);
    }

    match cmd.format {
        OutputFormat::Plain => print!("{}", browser.grid()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(browser.products())?),
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_categories(api: &HttpCatalog, json: bool) -> anyhow::Result<ExitCode> {
    let categories = api
        .list_categories()
        .await
        .context("loading categories")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else if categories.is_empty() {
        println!("No categories found.");
    } else {
        for category in &categories {
            println!("{category}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_admin(
    api: HttpCatalog,
    renderer: Renderer,
    cmd: AdminCommand,
) -> anyhow::Result<ExitCode> {
    let assume_yes = matches!(cmd, AdminCommand::Delete { yes: true, .. });
    let mut console = AdminConsole::new(api, TerminalPrompt::stdio(assume_yes), renderer);

    let succeeded = match cmd {
        AdminCommand::List => {
            let list = console.load_admin_products().await;
            print!("{list}");
            !matches!(list, ListView::Failed(_))
        }
        AdminCommand::Add(add_cmd) => {
            add_cmd.fill(console.add_form_mut());
            console.handle_add_product().await
        }
        AdminCommand::Edit(edit_cmd) => {
            if console.show_edit_modal(edit_cmd.id).await {
                edit_cmd.apply(console.edit_form_mut());
                console.handle_edit_product().await
            } else {
                false
            }
        }
        AdminCommand::Delete { id, .. } => console.delete_product(id).await,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[API]");
                println!("  Base URL:              {}", config.api.base_url);
                match config.api.timeout() {
                    Some(timeout) => println!("  Timeout:               {}s", timeout.as_secs()),
                    None => println!("  Timeout:               none"),
                }
                println!();
                println!("[Display]");
                println!("  Currency symbol:       {}", config.display.currency_symbol);
                println!("  Card placeholder:      {}", config.display.card_placeholder);
                println!(
                    "  Detail placeholder:    {}",
                    config.display.detail_placeholder
                );
                println!(
                    "  Thumbnail placeholder: {}",
                    config.display.thumbnail_placeholder
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

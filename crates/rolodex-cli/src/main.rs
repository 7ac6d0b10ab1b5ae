mod commands;
mod console;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, menu, Context};
use crate::console::Console;
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_store::{paths, ContactStore};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Personal contact list manager")]
struct Cli {
    /// Contacts file (defaults to the per-user data directory)
    #[arg(long, global = true)]
    contacts: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Banner shown when the interactive menu starts
    #[arg(long, global = true)]
    banner: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive menu (the default)
    Menu,
    List,
    Add(contacts::AddContactArgs),
    Search(contacts::SearchArgs),
    Delete(contacts::DeleteArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        contacts: contacts_path,
        config: config_path,
        banner: banner_path,
        json,
        verbose: _,
        no_color,
        command,
    } = cli;

    if let Some(Command::Completions(args)) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    match config::resolve_config_path(config_path) {
        Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
        Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
        Err(err) => debug!(error = %err, "config unavailable"),
    }

    let contacts_path = paths::resolve_contacts_path(
        contacts_path.or_else(|| app_config.contacts_path.clone()),
    )
    .with_context(|| "resolve contacts path")?;
    let mut store = ContactStore::open(&contacts_path);
    debug!(path = %store.path().display(), count = store.len(), "contacts opened");

    let mut ctx = Context {
        store: &mut store,
        json,
    };
    match command {
        None | Some(Command::Menu) => {
            let banner = config::resolve_banner_path(banner_path, &app_config)
                .and_then(|path| config::load_banner(&path));
            let color = app_config.color && !no_color;
            let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), color);
            menu::run(ctx.store, &mut console, banner.as_deref())
        }
        Some(Command::List) => contacts::list_contacts(&ctx),
        Some(Command::Add(args)) => contacts::add_contact(&mut ctx, args),
        Some(Command::Search(args)) => contacts::search_contact(&ctx, args),
        Some(Command::Delete(args)) => contacts::delete_contact(&mut ctx, args),
        Some(Command::Completions(_)) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}

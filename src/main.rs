mod catalog;
mod config;
mod dispatch;
mod error;
mod launch;
mod paths;
mod prompt;
mod resolve;
mod util;

use crate::catalog::{CatalogFetcher, CatalogStore, Library, SteamWebApi};
use crate::config::{SystemConfig, load_credentials};
use crate::dispatch::Dispatcher;
use crate::error::{DispatchError, ResolveError};
use crate::launch::{StrategyTable, SystemLauncher};
use crate::paths::PATH_DATA;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::resolve::{AliasTable, resolve_and_confirm};
use crate::util::{print_listing, title_case};

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gamelaunch")]
#[command(about = "Launch Steam and Epic games by name, typos and abbreviations welcome", long_about = None)]
#[command(version, args_conflicts_with_subcommands = true, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game to launch; several words are joined with spaces
    #[arg(value_name = "GAME")]
    game: Vec<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip the Steam Web API entirely (cached catalogs only)
    #[arg(long, global = true)]
    offline: bool,

    /// Directory holding settings.json and the catalog files
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the games in a library
    List {
        #[arg(value_enum, ignore_case = true)]
        library: Library,
    },
    /// Launch a random roguelike
    Random,
}

const SUBCOMMANDS: [&str; 2] = ["list", "random"];

/// Lowercase the first positional argument when it names a subcommand, so
/// `List steam` and `RANDOM` route like their lowercase forms.
fn canonical_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.into_iter().collect();
    let mut i = 1;
    while i < args.len() {
        let Some(arg) = args[i].to_str() else {
            break;
        };
        if arg == "--data-dir" {
            i += 2;
            continue;
        }
        if arg.starts_with('-') {
            i += 1;
            continue;
        }
        let lower = arg.to_lowercase();
        if SUBCOMMANDS.contains(&lower.as_str()) {
            args[i] = OsString::from(lower);
        }
        break;
    }
    args
}

/// What one run of the tool was asked to do
#[derive(Debug, PartialEq, Eq)]
enum Request {
    List(Library),
    Random,
    Launch(String),
}

impl Request {
    fn from_cli(command: Option<Commands>, game: &[String]) -> Self {
        match command {
            Some(Commands::List { library }) => Request::List(library),
            Some(Commands::Random) => Request::Random,
            None => {
                let query = game.join(" ");
                if query.trim().eq_ignore_ascii_case("roguelikes") {
                    Request::Random
                } else {
                    Request::Launch(query)
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(canonical_args(std::env::args_os()));
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Everything that returns `Err` here is fatal; request-level outcomes
/// (not found, cancelled, launch failures) are reported and return `Ok`.
fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| PATH_DATA.clone());
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let config = SystemConfig::detect(data_dir)?;
    let credentials = load_credentials(&config.data_dir)?;
    let mut store = CatalogStore::open(&config.data_dir)?;

    let api = if cli.offline {
        None
    } else {
        match SteamWebApi::new(credentials) {
            Ok(api) => Some(api),
            Err(e) => {
                log::warn!("Steam Web API unavailable: {e}");
                None
            }
        }
    };

    if let Some(api) = &api {
        refresh_steam_catalog(&mut store, api);
    }

    let launcher = SystemLauncher::new(config.opener);
    let strategies = StrategyTable::builtin();
    let dispatcher = Dispatcher {
        config: &config,
        launcher: &launcher,
        fetcher: api.as_ref().map(|a| a as &dyn CatalogFetcher),
        strategies: &strategies,
    };

    let request = Request::from_cli(cli.command, &cli.game);
    handle(
        request,
        &dispatcher,
        &mut store,
        &mut TerminalPrompter,
        &mut fastrand::Rng::new(),
    );

    Ok(())
}

/// Merge the account's owned games into the Steam catalog. Failure keeps
/// the cached catalog.
fn refresh_steam_catalog(store: &mut CatalogStore, fetcher: &dyn CatalogFetcher) {
    let fetched = match fetcher.fetch_owned() {
        Ok(fetched) => fetched,
        Err(e) => {
            log::warn!("{e}; using cached Steam catalog");
            return;
        }
    };

    match store.merge_steam(fetched) {
        Ok(added) if added > 0 => log::info!("added {added} new Steam titles"),
        Ok(_) => {}
        Err(e) => log::warn!("could not save Steam catalog: {e}"),
    }
}

fn handle(
    request: Request,
    dispatcher: &Dispatcher,
    store: &mut CatalogStore,
    prompter: &mut dyn Prompter,
    rng: &mut fastrand::Rng,
) {
    match request {
        Request::List(library) => print_listing(library, &store.listing(library)),
        Request::Random => {
            launch_random(dispatcher, store, rng);
        }
        Request::Launch(query) => launch_query(&query, dispatcher, store, prompter),
    }
}

fn launch_query(
    query: &str,
    dispatcher: &Dispatcher,
    store: &mut CatalogStore,
    prompter: &mut dyn Prompter,
) {
    match resolve_and_confirm(query, store, &AliasTable::builtin(), prompter) {
        Ok(title) => dispatch_title(&title, dispatcher, store),
        Err(ResolveError::NotFound { query, known }) => {
            println!("No matches found for '{query}'.");
            print_listing(Library::All, &known);
        }
        Err(ResolveError::Cancelled(reason)) => println!("{reason}"),
        Err(e @ ResolveError::Prompt(_)) => eprintln!("{e}"),
    }
}

/// Returns the roguelike that was picked, if the catalog had any.
fn launch_random(
    dispatcher: &Dispatcher,
    store: &mut CatalogStore,
    rng: &mut fastrand::Rng,
) -> Option<String> {
    let Some(roguelike) = store.pick_roguelike(rng) else {
        println!("No roguelikes found in the roguelike library.");
        return None;
    };
    println!("Launching random roguelike: {}", title_case(&roguelike));
    dispatch_title(&roguelike, dispatcher, store);
    Some(roguelike)
}

fn dispatch_title(title: &str, dispatcher: &Dispatcher, store: &mut CatalogStore) {
    match dispatcher.dispatch(title, store) {
        Ok(()) => {}
        Err(DispatchError::NotFound { title, known }) => {
            println!("Game '{title}' not found in the list of known games.");
            print_listing(Library::All, &known);
        }
        Err(e @ DispatchError::Launch(_)) => eprintln!("{e}"),
    }
}

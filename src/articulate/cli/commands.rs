use super::args::{AddArgs, Cli, Commands};
use super::print::{print_added, print_cards, print_config, print_notices};
use super::prompt::{confirm, fill_missing, is_interactive, CLEAR_PROMPT};
use articulate::api::{ArticulateApi, ArticulatePaths, CmdResult, ConfigAction};
use articulate::config::ArticulateConfig;
use articulate::error::{ArticulateError, Result};
use articulate::model::{Draft, Field};
use articulate::notify::Notifier;
use articulate::store::fs_backend::FsBackend;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "ARTICULATE_HOME";

struct AppContext {
    api: ArticulateApi<FsBackend>,
    notifier: Notifier,
}

/// Returns `Ok(false)` when the command reported an error message, so the
/// caller can exit non-zero without printing anything else.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    crate::init_tracing(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Remove { cards }) => handle_remove(&mut ctx, cards),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Export { out }) => handle_export(&mut ctx, out),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "articulate", "articulate")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ArticulateError::Store("Could not determine data dir".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(data_dir = %data_dir.display(), "resolved data dir");

    let backend = FsBackend::new(data_dir.clone());
    let api = ArticulateApi::new(backend, ArticulatePaths { data_dir });

    Ok(AppContext {
        api,
        notifier: Notifier::new(),
    })
}

/// Posts the result's messages and prints whatever is still on screen.
fn finish(ctx: &mut AppContext, result: &CmdResult) -> bool {
    ctx.notifier.dismiss_expired(Instant::now());
    ctx.notifier.post_all(result.messages.clone());
    print_notices(ctx.notifier.visible(Instant::now()));
    !result.has_errors()
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<bool> {
    let mut draft = draft_from_args(args);
    if is_interactive() {
        fill_missing(&mut draft)?;
    }

    let result = ctx.api.add_card(&draft)?;
    if let Some(card) = result.affected_cards.first() {
        print_added(ctx.api.card_count(), card);
    }
    Ok(finish(ctx, &result))
}

fn draft_from_args(args: AddArgs) -> Draft {
    let mut draft = Draft::new();
    let values = [
        (Field::Person, args.person),
        (Field::Object, args.object),
        (Field::World, args.world),
        (Field::Action, args.action),
        (Field::Nature, args.nature),
        (Field::Random, args.random),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            draft.set(field, value);
        }
    }
    match args.category {
        Some(category) => draft.with_category(category),
        None => draft,
    }
}

fn handle_list(ctx: &mut AppContext) -> Result<bool> {
    let result = ctx.api.list_cards()?;
    print_cards(&result.listed_cards);
    Ok(finish(ctx, &result))
}

fn handle_remove(ctx: &mut AppContext, cards: Vec<String>) -> Result<bool> {
    let result = ctx.api.remove_cards(&cards)?;
    Ok(finish(ctx, &result))
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<bool> {
    let confirmed = yes || confirm(CLEAR_PROMPT)?;
    let result = ctx.api.clear_cards(confirmed)?;
    Ok(finish(ctx, &result))
}

fn handle_export(ctx: &mut AppContext, out: Option<PathBuf>) -> Result<bool> {
    let out_dir = match out {
        Some(dir) => dir,
        None => configured_export_dir(&ctx.api.paths().data_dir),
    };
    let result = ctx.api.export_cards(&out_dir)?;
    Ok(finish(ctx, &result))
}

/// Falls back to the working directory when the config is unset or unreadable.
fn configured_export_dir(data_dir: &Path) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match ArticulateConfig::load(data_dir) {
        Ok(config) => config.export_dir_or(&cwd),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable config, exporting to the current directory");
            cwd
        }
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    Ok(finish(ctx, &result))
}

use super::render::{eprint_messages, print_messages, render_json, render_table};
use super::setup::{Cli, Commands};
use super::styles::MUTED;
use clap::Parser;
use shelf::api::{parse_index, CmdResult, ConfigAction, ShelfApi};
use shelf::error::Result;
use shelf::init::initialize;
use shelf::model::{Criteria, Record, Scope};
use shelf::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHELF_LOG";

struct AppContext {
    api: ShelfApi<FileStore>,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Add { record }) => handle_add(&mut ctx, record.into()),
        Some(Commands::Remove { index }) => handle_remove(&mut ctx, &index),
        Some(Commands::Replace { index, record }) => {
            handle_replace(&mut ctx, &index, record.into())
        }
        Some(Commands::Search { criteria, json }) => handle_search(&ctx, criteria.into(), json),
        Some(Commands::Update { criteria, old, new }) => {
            handle_update(&mut ctx, criteria.into(), &old, &new)
        }
        Some(Commands::Delete { criteria }) => handle_delete(&mut ctx, criteria.into()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
        None => handle_list(&ctx, false),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global)?;
    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
    })
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_listing(&result, json)
}

fn print_listing(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        eprint_messages(&result.messages);
        print!("{}", render_json(&result.listed_records)?);
    } else {
        print_messages(&result.messages);
        print!("{}", render_table(&result.listed_records));
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, record: Record) -> Result<()> {
    let result = ctx.api.add_record(record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, index: &str) -> Result<()> {
    let index = parse_index(index)?;
    let result = ctx.api.remove_record(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_replace(ctx: &mut AppContext, index: &str, record: Record) -> Result<()> {
    let index = parse_index(index)?;
    let result = ctx.api.replace_record(index, record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, criteria: Criteria, json: bool) -> Result<()> {
    let result = ctx.api.search_records(&criteria)?;
    print_listing(&result, json)
}

fn handle_update(ctx: &mut AppContext, criteria: Criteria, old: &str, new: &str) -> Result<()> {
    let result = ctx.api.update_records(&criteria, old, new)?;
    print_messages(&result.messages);
    if !result.affected_records.is_empty() {
        print!("{}", render_table(&result.affected_records));
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, criteria: Criteria) -> Result<()> {
    let result = ctx.api.remove_matching(&criteria)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.snapshot_path();
    for path in &result.paths {
        println!("{}", path.display());
    }
    println!("{}", MUTED.apply_to(format!("{} catalog", ctx.scope)));
    print_messages(&result.messages);
    Ok(())
}

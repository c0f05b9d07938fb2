//! # CLI Layer
//!
//! This module is **one possible UI client** for garage, not the application itself.
//! It is the only place that touches stdin/stdout/stderr.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Context Setup**: open the catalog through `init::initialize`
//! 3. **Confirmation**: deletes ask before they act, unless `--yes` is given
//! 4. **API Dispatch**: call the matching `GarageApi` method
//! 5. **Output**: print messages, then re-render the affected save file's cars
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_messages, render_car_list, render_cars, render_save_files};
use super::setup::{CarCommands, Cli, Commands, DetailCommands};
use clap::Parser;
use garage::api::{configure, CmdResult, ConfigAction, GarageApi};
use garage::commands::export::default_path;
use garage::config::GarageConfig;
use garage::error::{GarageError, Result};
use garage::index::DisplayIndex;
use garage::init::{initialize, resolve_data_dir};
use garage::store::fs_backend::FsBackend;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: GarageApi<FsBackend>,
    config: GarageConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Config runs without opening the catalog so a bad storage key stays fixable.
    let command = match cli.command {
        Some(Commands::Config { key, value }) => return handle_config(key, value),
        other => other,
    };

    let mut ctx = init_context()?;

    match command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::New { name }) => handle_new(&mut ctx, &name),
        Some(Commands::Remove { name, yes }) => handle_remove(&mut ctx, &name, yes),
        Some(Commands::Show { save_file, cars }) => handle_show(&ctx, &save_file, &cars),
        Some(Commands::Car(cmd)) => match cmd {
            CarCommands::Add {
                save_file,
                photo,
                name,
            } => handle_car_add(&mut ctx, &save_file, &name.join(" "), photo),
            CarCommands::Delete {
                save_file,
                car,
                yes,
            } => handle_car_delete(&mut ctx, &save_file, &car, yes),
            CarCommands::Photo {
                save_file,
                car,
                image,
            } => handle_car_photo(&mut ctx, &save_file, &car, image),
            CarCommands::ExtractPhoto {
                save_file,
                car,
                out,
            } => handle_extract_photo(&ctx, &save_file, &car, out),
        },
        Some(Commands::Detail(cmd)) => match cmd {
            DetailCommands::Add {
                save_file,
                car,
                text,
            } => handle_detail_add(&mut ctx, &save_file, &car, &text.join(" ")),
            DetailCommands::Edit {
                save_file,
                car,
                detail,
                text,
            } => handle_detail_edit(&mut ctx, &save_file, &car, &detail, &text.join(" ")),
            DetailCommands::Delete {
                save_file,
                car,
                detail,
                yes,
            } => handle_detail_delete(&mut ctx, &save_file, &car, &detail, yes),
        },
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("garage=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed (e.g. in tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let ctx = initialize()?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

/// Prints messages first, then the freshly rendered car list if the command
/// touched one.
fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    if let Some(save_file) = &result.save_file {
        print!("{}", render_car_list(save_file, &result.listed_cars));
    }
}

fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().map_err(GarageError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(GarageError::Io)?;
    let answer = input.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn cancelled() -> Result<()> {
    print_messages(&[garage::api::CmdMessage::info("Operation cancelled.")]);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_save_files()?;
    print!("{}", render_save_files(&result.save_files));
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.create_save_file(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: &str, yes: bool) -> Result<()> {
    // Fail on a missing save file before asking anything.
    ctx.api.list_cars(name)?;
    if !confirm(
        &format!("Are you sure you want to delete the save file: {}?", name),
        yes,
    )? {
        return cancelled();
    }
    let result = ctx.api.delete_save_file(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, save_file: &str, cars: &[String]) -> Result<()> {
    if cars.is_empty() {
        let result = ctx.api.list_cars(save_file)?;
        print_result(&result);
    } else {
        let result = ctx.api.view_cars(save_file, cars)?;
        print!("{}", render_cars(&result.affected_cars));
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_car_add(
    ctx: &mut AppContext,
    save_file: &str,
    name: &str,
    photo: Option<PathBuf>,
) -> Result<()> {
    let result = ctx.api.create_car(save_file, name, photo.as_deref())?;
    print_result(&result);
    Ok(())
}

fn handle_car_delete(ctx: &mut AppContext, save_file: &str, car: &str, yes: bool) -> Result<()> {
    let target = ctx.api.view_cars(save_file, &[car])?;
    let name = target
        .affected_cars
        .first()
        .map(|dc| dc.car.name.clone())
        .unwrap_or_default();
    if !confirm(
        &format!("Are you sure you want to delete this car: {}?", name),
        yes,
    )? {
        return cancelled();
    }
    let result = ctx.api.delete_car(save_file, car)?;
    print_result(&result);
    Ok(())
}

fn handle_car_photo(ctx: &mut AppContext, save_file: &str, car: &str, image: PathBuf) -> Result<()> {
    let result = ctx.api.set_car_photo(save_file, car, &image)?;
    print_result(&result);
    Ok(())
}

fn handle_extract_photo(ctx: &AppContext, save_file: &str, car: &str, out: PathBuf) -> Result<()> {
    let result = ctx.api.extract_car_photo(save_file, car, &out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_detail_add(ctx: &mut AppContext, save_file: &str, car: &str, text: &str) -> Result<()> {
    let result = ctx.api.add_car_detail(save_file, car, text)?;
    print_result(&result);
    Ok(())
}

fn handle_detail_edit(
    ctx: &mut AppContext,
    save_file: &str,
    car: &str,
    detail: &str,
    text: &str,
) -> Result<()> {
    let result = ctx.api.edit_car_detail(save_file, car, detail, text)?;
    print_result(&result);
    Ok(())
}

fn handle_detail_delete(
    ctx: &mut AppContext,
    save_file: &str,
    car: &str,
    detail: &str,
    yes: bool,
) -> Result<()> {
    if !yes {
        let target = ctx.api.view_cars(save_file, &[car])?;
        let text = target.affected_cars.first().and_then(|dc| {
            detail
                .parse::<DisplayIndex>()
                .ok()
                .and_then(|idx| dc.car.details.get(idx.position()).cloned())
        });
        // An unknown detail index falls through to the API, which reports it.
        if let Some(text) = text {
            if !confirm(
                &format!("Are you sure you want to delete the detail: \"{}\"?", text),
                false,
            )? {
                return cancelled();
            }
        }
    }
    let result = ctx.api.delete_car_detail(save_file, car, detail)?;
    print_result(&result);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let output = match output {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().map_err(GarageError::Io)?;
            default_path(&ctx.config, &cwd)
        }
    };
    let result = ctx.api.export(&output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let import_exts = ctx.config.import_extensions.clone();
    let result = ctx.api.import(&path, &import_exts)?;
    print_messages(&result.messages);
    print!("{}", render_save_files(&ctx.api.list_save_files()?.save_files));
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = configure(&resolve_data_dir()?, action)?;
    print_messages(&result.messages);
    Ok(())
}

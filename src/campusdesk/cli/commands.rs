//! Dispatch from parsed arguments to the API.
//!
//! `run()` parses, sets up logging, builds the context and hands each
//! subcommand to a `handle_*` function. Handlers call one API method and
//! print the result; they hold no business logic.

use super::render::{
    print_messages, render_config, render_dashboard, render_faculty_list, render_gallery_list,
    render_reference_list,
};
use super::setup::{Cli, Commands, FacultyArgs, FacultyCommands, GalleryCommands};
use campusdesk::api::{ConfigAction, DeskApi, FacultyForm, GalleryForm, View};
use campusdesk::error::Result;
use campusdesk::init::initialize;
use campusdesk::logging::{init_logging, Verbosity};
use campusdesk::model::{DEPARTMENTS, POSITIONS};
use campusdesk::store::fs::FileStore;
use campusdesk::upload::{MockUploader, SelectedFile};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;

struct AppContext {
    api: DeskApi<FileStore, MockUploader>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let mut ctx = init_context(&cli)?;
    let outcome = dispatch(&mut ctx, cli.command).await;
    if outcome.is_err() {
        print_messages(&ctx.api.take_notices());
    }
    outcome
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    Ok(AppContext { api: ctx.api })
}

async fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Dashboard) | None => handle_view(ctx, View::Dashboard),
        Some(Commands::Gallery(cmd)) => match cmd {
            GalleryCommands::List => handle_view(ctx, View::Gallery),
            GalleryCommands::Add {
                name,
                description,
                image,
            } => handle_gallery_add(ctx, name, description, image.as_deref()).await,
            GalleryCommands::Delete { selector, yes } => {
                handle_gallery_delete(ctx, &selector, yes)
            }
        },
        Some(Commands::Faculty(cmd)) => match cmd {
            FacultyCommands::List => handle_view(ctx, View::Faculty),
            FacultyCommands::Add(args) => handle_faculty_add(ctx, args).await,
            FacultyCommands::Delete { selector, yes } => {
                handle_faculty_delete(ctx, &selector, yes)
            }
            FacultyCommands::Departments => handle_reference(DEPARTMENTS),
            FacultyCommands::Positions => handle_reference(POSITIONS),
        },
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Init) => handle_init(ctx),
    }
}

fn handle_view(ctx: &mut AppContext, view: View) -> Result<()> {
    let result = ctx.api.navigate(view);
    match view {
        View::Dashboard => {
            if let Some(summary) = &result.summary {
                print!("{}", render_dashboard(summary));
            }
        }
        View::Gallery => print!("{}", render_gallery_list(&result.listed_gallery)),
        View::Faculty => print!("{}", render_faculty_list(&result.listed_faculty)),
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_gallery_add(
    ctx: &mut AppContext,
    name: String,
    description: String,
    image: Option<&Path>,
) -> Result<()> {
    let mut form = GalleryForm {
        name,
        description,
        file: None,
    };
    if !form.missing_required() {
        form.file = read_selected(image).await?;
    }

    let result = ctx.api.add_gallery_item(form).await?;
    print_messages(&result.messages);
    Ok(())
}

/// Files are read only once the typed fields pass, so a blank form reports
/// the missing fields rather than an unreadable path.
async fn read_selected(path: Option<&Path>) -> Result<Option<SelectedFile>> {
    match path {
        Some(path) => Ok(Some(SelectedFile::read(path).await?)),
        None => Ok(None),
    }
}

fn handle_gallery_delete(ctx: &mut AppContext, selector: &str, yes: bool) -> Result<()> {
    let confirm = confirm_on_stdin(yes);
    let result = ctx.api.delete_gallery_item(selector, &confirm)?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_faculty_add(ctx: &mut AppContext, args: FacultyArgs) -> Result<()> {
    let mut form = FacultyForm {
        name: args.name,
        position: args.position,
        qualification: args.qualification,
        experience: args.experience,
        specializations: args.specializations,
        email: args.email,
        phone: args.phone,
        department: args.department,
        photo: None,
    };
    if !form.missing_required() {
        form.photo = read_selected(args.photo.as_deref()).await?;
    }

    let result = ctx.api.add_faculty_member(form).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_faculty_delete(ctx: &mut AppContext, selector: &str, yes: bool) -> Result<()> {
    let confirm = confirm_on_stdin(yes);
    let result = ctx.api.delete_faculty_member(selector, &confirm)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reference(entries: &[&str]) -> Result<()> {
    print!("{}", render_reference_list(entries));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
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

/// `--yes` answers every question; otherwise ask on stdin, defaulting to no.
fn confirm_on_stdin(yes: bool) -> impl Fn(&str) -> bool {
    move |prompt: &str| yes || ask(prompt)
}

fn ask(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

use super::render::{
    print_messages, render_config, render_folders, render_identifier, render_json, render_paths,
};
use super::setup::{Cli, Commands, FindArgs};
use clap::CommandFactory;
use colored::Colorize;
use jdnav::api::ConfigAction;
use jdnav::clipboard::copy_to_clipboard;
use jdnav::error::Result;
use jdnav::init::{initialize, JdContext, Overrides, ENV_ROOT};
use jdnav::opener::open_folder;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `JDNAV_LOG=debug`.
const LOG_ENV: &str = "JDNAV_LOG";

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let overrides = Overrides::from_env().with_root(cli.root);
    let ctx = initialize(&overrides)?;

    match command {
        Commands::Find(args) => handle_find(&ctx, &args),
        Commands::Parse { query } => handle_parse(&ctx, &query.join(" ")),
        Commands::Config { key, value, unset } => handle_config(&ctx, key, value, unset),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jdnav=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_find(ctx: &JdContext, args: &FindArgs) -> Result<ExitCode> {
    let result = ctx.api.find(&args.query_text())?;

    if args.json {
        print!("{}", render_json(&result));
    } else if args.path_only {
        // find only reports warnings and errors, which go to stderr
        print!("{}", render_paths(&result.folders));
        print_messages(&result.messages);
    } else {
        print!("{}", render_folders(&result.folders));
        print_messages(&result.messages);
    }

    // Actions apply to the first match, as the launcher's Enter key did
    if let Some(first) = result.folders.first() {
        let path_text = first.path.display().to_string();

        if args.copy {
            match copy_to_clipboard(&path_text) {
                Ok(()) => eprintln!("{}", "Path copied to clipboard.".dimmed()),
                Err(e) => {
                    warn!(error = %e, "copy failed");
                    eprintln!("{} {}", "Warning:".yellow(), e);
                }
            }
        }

        if args.open {
            if let Err(e) = open_folder(&first.path, ctx.config.opener.as_deref()) {
                warn!(error = %e, "open failed");
                eprintln!("{} {}", "Warning:".yellow(), e);
            }
        }
    }

    Ok(exit_code(result.is_success()))
}

fn handle_parse(ctx: &JdContext, query: &str) -> Result<ExitCode> {
    let result = ctx.api.parse(query)?;
    if let Some(identifier) = &result.identifier {
        print!("{}", render_identifier(identifier));
    }
    print_messages(&result.messages);
    Ok(exit_code(result.is_success()))
}

fn handle_config(
    ctx: &JdContext,
    key: Option<String>,
    value: Option<String>,
    unset: bool,
) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), _) if unset => ConfigAction::Unset(k),
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(&config.list_all()));
            if let (Some(root), None) = (ctx.api.root(), config.root()) {
                let note = format!("(using root {} from --root or ${})", root.display(), ENV_ROOT);
                println!("{}", note.dimmed());
            }
        }
    }
    print_messages(&result.messages);
    Ok(exit_code(result.is_success()))
}

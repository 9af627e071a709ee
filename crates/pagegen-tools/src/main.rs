//! Pagegen CLI - list page generation for Next.js projects using shadcn/ui

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pagegen_core::tui::GenerateArgs;
use pagegen_core::{load_config, plan, resolve_components};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagegen")]
#[command(about = "Generate shadcn/ui list pages for Next.js projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a page (interactive unless --config is given)
    Generate(CliGenerateArgs),
    /// Show the files and components a config would produce, without writing anything
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
pub struct CliGenerateArgs {
    /// Page configuration file (YAML or JSON); skips the prompts
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root of the Next.js project (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip shadcn/ui component installation
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Dev server base URL for the next steps (env: PAGEGEN_DEV_SERVER_URL)
    #[arg(long = "dev-server-url")]
    pub dev_server_url: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            config: args.config,
            directory: args.directory,
            skip_install: args.skip_install,
            dev_server_url: args.dev_server_url,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Page configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Root of the Next.js project (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

/// Print the planned layout without touching the project
async fn print_plan(args: PlanArgs) -> Result<()> {
    let root = args.directory.unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&args.config).await?.validate()?;
    let files = plan::plan(&config, &root)?;

    println!(
        "{} {} ({}), route /{}",
        "ℹ".blue(),
        config.page_name.bold(),
        config.architecture.display_name(),
        config.route_path
    );
    println!();
    println!("  Files");
    for file in &files {
        let path = file.path.strip_prefix(&root).unwrap_or(&file.path);
        println!("    {}", path.display());
    }

    if config.architecture.installs_components() {
        let names: Vec<&str> = resolve_components(&config)
            .iter()
            .map(|id| id.as_str())
            .collect();
        println!();
        println!("  shadcn/ui components");
        println!("    {}", names.join(", ").dimmed());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Generate(generate_args)) => {
            let result = pagegen_core::run(generate_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Plan(plan_args)) => print_plan(plan_args).await,
        None => {
            // No subcommand provided, default to interactive generation
            let result = pagegen_core::run(GenerateArgs::default()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

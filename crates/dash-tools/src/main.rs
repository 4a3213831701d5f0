//! Dash CLI - Part scaffolding for the Dash design system

use anyhow::Result;
use clap::{Parser, Subcommand};
use partgen_core::tui::GenerateArgs;
use partgen_core::{entry_for, ModuleKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dash-tools")]
#[command(about = "CLI for scaffolding Dash design-system parts")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a part wrapped in its own module with a barrel file
    Module(CliGenerateArgs),
    /// Scaffold a bare part for an existing module
    Part(CliGenerateArgs),
}

#[derive(Parser, Debug)]
pub struct CliGenerateArgs {
    /// Part name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Part kind to generate: component, service or pipe
    #[arg(short, long)]
    pub part: Option<String>,

    /// Component parts to include (comma-separated: template,style,theme)
    #[arg(short = 'c', long, value_delimiter = ',')]
    pub component_parts: Option<Vec<String>>,

    /// Directory the part folder is created in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Selector prefix (overrides dash.yaml and DASH_PREFIX)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print the planned files without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            name: args.name,
            part: args.part,
            component_parts: args.component_parts,
            directory: args.directory,
            prefix: args.prefix,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
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

    let (entry, generate_args) = match args.command {
        Some(Command::Module(cli_args)) => (entry_for(ModuleKind::Module), cli_args.into()),
        Some(Command::Part(cli_args)) => (entry_for(ModuleKind::PartOfModule), cli_args.into()),
        // No subcommand provided, default to module generation (interactive mode)
        None => (entry_for(ModuleKind::Module), GenerateArgs::default()),
    };

    let result = partgen_core::run(entry, generate_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

//! Charm-style CLI prompts using cliclack

use crate::answers::{Answers, ComponentPart, ModuleKind, Part, PartKind};
use crate::config::DashConfig;
use crate::plan;
use crate::registry::GeneratorEntry;
use crate::tree::DirectoryNode;
use crate::writer;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for a generate run. Answers supplied here skip their
/// prompt.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Part name
    pub name: Option<String>,

    /// Part kind to generate (component, service, pipe)
    pub part: Option<String>,

    /// Component parts to include (template, style, theme)
    pub component_parts: Option<Vec<String>>,

    /// Directory the part folder is created in
    pub directory: Option<PathBuf>,

    /// Selector prefix override
    pub prefix: Option<String>,

    /// Print the planned files without writing them
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run a generator entry with interactive prompts for any missing answers
pub async fn run(entry: &GeneratorEntry, args: GenerateArgs) -> Result<()> {
    cliclack::intro(entry.display_name)?;

    // Step 1: Resolve target directory and prefix configuration
    let target_dir = select_directory(&args)?;
    let config = DashConfig::load(&target_dir, args.prefix.as_deref())?;

    // Step 2: Collect the answer set
    let name = collect_name(&args)?;
    let part = collect_part(&args)?;
    let answers = Answers::new(name, part, entry.module_kind)?;

    // Step 3: Plan the file tree (pure, no I/O)
    let root = plan::build_plan(&answers, &config.prefix);

    if args.dry_run {
        print_plan(&root)?;
        cliclack::outro("Dry run - nothing written")?;
        return Ok(());
    }

    // Step 4: Write the tree
    confirm_existing_directory(&target_dir, &root.path, &args)?;

    let spinner = cliclack::spinner();
    spinner.start("Generating files...");
    let written = writer::write_tree(&target_dir, &root).await?;
    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        target_dir.join(&root.path).display()
    ));

    // Step 5: Show next steps
    print_next_steps(&answers)?;

    cliclack::outro("Happy coding!")?;

    Ok(())
}

fn collect_name(args: &GenerateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        cliclack::log::info(format!("Part name: {}", name))?;
        return Ok(name.clone());
    }

    let name: String = cliclack::input("Part name")
        .placeholder("user card")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Enter a part name")
            } else {
                Ok(())
            }
        })
        .interact()?;

    Ok(name)
}

fn collect_part(args: &GenerateArgs) -> Result<Part> {
    let kind = match args.part.as_deref() {
        Some(raw) => match parse_part_kind(raw) {
            Some(kind) => {
                cliclack::log::info(format!("Part kind: {}", kind))?;
                kind
            }
            None => anyhow::bail!(
                "Unknown part kind '{}'. Expected one of: component, service, pipe",
                raw
            ),
        },
        None => {
            let mut select = cliclack::select("What do you want to create?");
            for kind in PartKind::ALL {
                select = select.item(kind, kind.display_name(), "");
            }
            select.interact()?
        }
    };

    match kind {
        PartKind::Component => Ok(Part::component(collect_component_parts(args)?)),
        PartKind::Service => Ok(Part::Service),
        PartKind::Pipe => Ok(Part::Pipe),
    }
}

fn collect_component_parts(args: &GenerateArgs) -> Result<Vec<ComponentPart>> {
    if let Some(raw_parts) = &args.component_parts {
        let mut selected = Vec::new();
        for raw in raw_parts {
            match parse_component_part(raw) {
                Some(part) => selected.push(part),
                None => cliclack::log::warning(format!("Unknown component part: {}", raw))?,
            }
        }
        return Ok(selected);
    }

    // Non-interactive runs keep the multiselect's pre-selected default
    if args.yes {
        return Ok(vec![ComponentPart::Template]);
    }

    let mut multi = cliclack::multiselect("Which component parts do you need?");
    for part in ComponentPart::ALL {
        multi = multi.item(part, part.display_name(), "");
    }

    let selected: Vec<ComponentPart> = multi
        .initial_values(vec![ComponentPart::Template])
        .required(false)
        .interact()?;

    Ok(selected)
}

fn select_directory(args: &GenerateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir
    } else {
        let input: String = cliclack::input("Target directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir
        } else {
            let p = PathBuf::from(&input);
            if p.is_absolute() {
                p
            } else {
                current_dir.join(p)
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    Ok(path)
}

fn confirm_existing_directory(
    target_dir: &Path,
    part_dir_name: &str,
    args: &GenerateArgs,
) -> Result<()> {
    let part_dir = target_dir.join(part_dir_name);
    if !part_dir.exists() {
        return Ok(());
    }

    cliclack::log::warning(format!("Directory {} already exists", part_dir.display()))?;

    let confirm = if args.yes {
        true
    } else {
        cliclack::confirm("Overwrite generated files?")
            .initial_value(false)
            .interact()?
    };

    if !confirm {
        anyhow::bail!("Generation cancelled.");
    }

    Ok(())
}

fn print_plan(root: &DirectoryNode) -> Result<()> {
    let paths = root.file_paths();
    cliclack::log::info(format!("{} files planned", paths.len()))?;

    println!();
    for path in &paths {
        println!("  {} {}", "->".blue(), path);
    }
    println!();

    Ok(())
}

fn print_next_steps(answers: &Answers) -> Result<()> {
    let mut steps = Vec::new();

    match answers.module_kind {
        ModuleKind::Module => {
            steps.push("Import the generated module where you need it".to_string());
        }
        ModuleKind::PartOfModule => {
            steps.push("Declare or provide the generated part in its module".to_string());
        }
    }

    if answers.part.kind() != PartKind::Service {
        steps.push("Fill in the generated spec stubs".to_string());
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    Ok(())
}

/// Parse a part-kind flag value
fn parse_part_kind(s: &str) -> Option<PartKind> {
    match s.to_lowercase().as_str() {
        "component" | "c" => Some(PartKind::Component),
        "service" | "s" => Some(PartKind::Service),
        "pipe" | "p" => Some(PartKind::Pipe),
        _ => None,
    }
}

/// Parse a component-part flag value
fn parse_component_part(s: &str) -> Option<ComponentPart> {
    match s.to_lowercase().as_str() {
        "template" | "tpl" => Some(ComponentPart::Template),
        "style" | "scss" => Some(ComponentPart::Style),
        "theme" => Some(ComponentPart::Theme),
        _ => None,
    }
}

//! Registry of the generator entries exposed by the tools binary
//!
//! The two entries differ only in whether the generated part gets wrapped in
//! its own module. The table is process-wide static configuration; the
//! binary derives its subcommands from it.

use crate::answers::ModuleKind;

/// A top-level generator entry
#[derive(Debug, Clone, Copy)]
pub struct GeneratorEntry {
    /// Subcommand name on the CLI
    pub command: &'static str,
    /// Entry name shown in prompts and help text
    pub display_name: &'static str,
    /// One-line description for help output
    pub description: &'static str,
    pub module_kind: ModuleKind,
}

/// The generator entries, in the order they are presented
pub const GENERATORS: &[GeneratorEntry] = &[
    GeneratorEntry {
        command: "module",
        display_name: "Create module",
        description: "Scaffold a part wrapped in its own module with a barrel file",
        module_kind: ModuleKind::Module,
    },
    GeneratorEntry {
        command: "part",
        display_name: "Create part of module",
        description: "Scaffold a bare part for an existing module",
        module_kind: ModuleKind::PartOfModule,
    },
];

/// Look up the entry for a module kind
pub fn entry_for(kind: ModuleKind) -> &'static GeneratorEntry {
    GENERATORS
        .iter()
        .find(|entry| entry.module_kind == kind)
        .expect("every module kind has a registry entry")
}

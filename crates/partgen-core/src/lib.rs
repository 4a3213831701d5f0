//! Partgen Core - Shared library for Dash part scaffolding
//!
//! This library plans and writes file scaffolds for Dash design-system parts
//! (components, services, pipes). It is designed to be used by CLI binaries
//! that expose the generator entries with different front-ends.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure planning: name derivation, the file
//!   set builders, and the in-memory tree they produce
//! - **Layer 2: Boundary** - Config loading and the tree writer
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use partgen_core::{build_plan, Answers, ComponentPart, ModuleKind, Part};
//!
//! let answers = Answers::new(
//!     "user card",
//!     Part::component([ComponentPart::Style]),
//!     ModuleKind::Module,
//! )
//! .unwrap();
//!
//! let plan = build_plan(&answers, "dsh");
//! assert_eq!(plan.path, "user-card");
//! ```

pub mod answers;
pub mod config;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod tree;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{Answers, ComponentPart, ModuleKind, Part, PartKind, PlanError};
pub use config::{DashConfig, DEFAULT_PREFIX};
pub use naming::DerivedNames;
pub use plan::build_plan;
pub use registry::{entry_for, GeneratorEntry, GENERATORS};
pub use tree::{DirectoryNode, FileNode, TreeNode};
pub use writer::write_tree;

#[cfg(feature = "tui")]
pub use tui::{run, GenerateArgs};

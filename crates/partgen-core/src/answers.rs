//! Answer set collected before planning
//!
//! The prompt flow (or CLI flags) fills in an [`Answers`] value; the planner
//! consumes it without ever re-validating. Component-only choices live on the
//! `Component` variant so they cannot exist for services or pipes.

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Precondition violations rejected at the answer boundary
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("part name must not be empty")]
    BlankName,
}

/// The three scaffoldable unit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Component,
    Service,
    Pipe,
}

impl PartKind {
    pub const ALL: [PartKind; 3] = [PartKind::Component, PartKind::Service, PartKind::Pipe];

    /// Capitalized name, also the class-name suffix (e.g. `UserCardComponent`)
    pub fn display_name(&self) -> &'static str {
        match self {
            PartKind::Component => "Component",
            PartKind::Service => "Service",
            PartKind::Pipe => "Pipe",
        }
    }

    /// Lower-case label used in generated filenames (e.g. `user-card.component.ts`)
    pub fn label(&self) -> &'static str {
        match self {
            PartKind::Component => "component",
            PartKind::Service => "service",
            PartKind::Pipe => "pipe",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional files a component can be generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComponentPart {
    Template,
    Style,
    Theme,
}

impl ComponentPart {
    pub const ALL: [ComponentPart; 3] = [
        ComponentPart::Template,
        ComponentPart::Style,
        ComponentPart::Theme,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentPart::Template => "Template",
            ComponentPart::Style => "Style",
            ComponentPart::Theme => "Theme",
        }
    }
}

impl fmt::Display for ComponentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The part being generated, with the choices that only apply to its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Component { parts: BTreeSet<ComponentPart> },
    Service,
    Pipe,
}

impl Part {
    /// Build a component part from the multiselect answer
    pub fn component(parts: impl IntoIterator<Item = ComponentPart>) -> Self {
        Part::Component {
            parts: parts.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> PartKind {
        match self {
            Part::Component { .. } => PartKind::Component,
            Part::Service => PartKind::Service,
            Part::Pipe => PartKind::Pipe,
        }
    }
}

/// Whether the part gets wrapped in its own module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Part files plus a module definition and a barrel file
    Module,
    /// Part files only, for inclusion in an existing module
    PartOfModule,
}

/// Everything the planner needs for one invocation
#[derive(Debug, Clone)]
pub struct Answers {
    pub name: String,
    pub part: Part,
    pub module_kind: ModuleKind,
}

impl Answers {
    /// Validate and assemble an answer set. Blank names are rejected here so
    /// the planner itself stays total.
    pub fn new(
        name: impl Into<String>,
        part: Part,
        module_kind: ModuleKind,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlanError::BlankName);
        }
        Ok(Self {
            name,
            part,
            module_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        assert!(Answers::new("", Part::Service, ModuleKind::Module).is_err());
        assert!(Answers::new("   ", Part::Pipe, ModuleKind::PartOfModule).is_err());
        assert!(Answers::new("toolbar", Part::Service, ModuleKind::Module).is_ok());
    }

    #[test]
    fn test_component_parts_collect_into_set() {
        let part = Part::component([
            ComponentPart::Style,
            ComponentPart::Template,
            ComponentPart::Template,
        ]);
        match part {
            Part::Component { parts } => {
                assert_eq!(parts.len(), 2);
                assert!(parts.contains(&ComponentPart::Template));
                assert!(parts.contains(&ComponentPart::Style));
            }
            _ => panic!("expected component"),
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(PartKind::Component.label(), "component");
        assert_eq!(PartKind::Service.display_name(), "Service");
        assert_eq!(Part::Pipe.kind(), PartKind::Pipe);
    }
}

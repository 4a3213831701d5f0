//! The scaffold planner
//!
//! This module provides:
//! - Component file set building (definition, style, theme, template)
//! - Part dispatch over component/service/pipe with their spec stubs
//! - Module wrapping (module definition plus barrel file)
//!
//! `build_plan` is a pure function from the collected answers and the
//! configured prefix to an in-memory directory tree. It performs no I/O;
//! materializing the tree is the writer's job.

mod component;
mod module;
mod part;

use crate::answers::{Answers, ModuleKind};
use crate::naming::DerivedNames;
use crate::tree::DirectoryNode;

/// Build the file plan for one invocation. The returned directory is named
/// by the dash-cased part name; its children are in write order: the part's
/// own files, then (for module generation) the module definition and barrel.
pub fn build_plan(answers: &Answers, prefix: &str) -> DirectoryNode {
    let names = DerivedNames::derive(prefix, &answers.name);
    let mut root = DirectoryNode::new(names.filename.clone());

    for file in part::part_files(&names, &answers.part) {
        root.push_file(file);
    }

    if answers.module_kind == ModuleKind::Module {
        for file in module::module_files(&names, &answers.part) {
            root.push_file(file);
        }
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ComponentPart, Part};

    fn answers(part: Part, module_kind: ModuleKind) -> Answers {
        Answers::new("user card", part, module_kind).unwrap()
    }

    #[test]
    fn test_style_only_component_part() {
        let plan = build_plan(
            &answers(Part::component([ComponentPart::Style]), ModuleKind::PartOfModule),
            "dsh",
        );

        assert_eq!(plan.path, "user-card");
        assert_eq!(
            plan.file_paths(),
            vec![
                "user-card/user-card.component.ts",
                "user-card/user-card.component.scss",
                "user-card/user-card.component.spec.ts",
            ]
        );
    }

    #[test]
    fn test_module_kind_appends_module_then_barrel_for_every_part() {
        for part in [
            Part::component([ComponentPart::Template]),
            Part::Service,
            Part::Pipe,
        ] {
            let plan = build_plan(&answers(part, ModuleKind::Module), "dsh");
            let paths = plan.file_paths();

            let tail: Vec<&str> = paths[paths.len() - 2..]
                .iter()
                .map(String::as_str)
                .collect();
            assert_eq!(
                tail,
                vec!["user-card/user-card.module.ts", "user-card/index.ts"]
            );
        }
    }

    #[test]
    fn test_part_of_module_omits_wrapper_files() {
        for part in [Part::component([]), Part::Service, Part::Pipe] {
            let plan = build_plan(&answers(part, ModuleKind::PartOfModule), "dsh");
            for path in plan.file_paths() {
                assert!(!path.contains("module"));
                assert!(!path.ends_with("index.ts"));
            }
        }
    }

    #[test]
    fn test_full_component_module_order() {
        let plan = build_plan(
            &answers(
                Part::component([
                    ComponentPart::Template,
                    ComponentPart::Style,
                    ComponentPart::Theme,
                ]),
                ModuleKind::Module,
            ),
            "dsh",
        );

        assert_eq!(
            plan.file_paths(),
            vec![
                "user-card/user-card.component.ts",
                "user-card/user-card.component.scss",
                "user-card/_user-card.theme.scss",
                "user-card/user-card.component.html",
                "user-card/user-card.component.spec.ts",
                "user-card/user-card.module.ts",
                "user-card/index.ts",
            ]
        );
    }

    #[test]
    fn test_derived_names_do_not_drift_across_files() {
        let plan = build_plan(
            &answers(
                Part::component([ComponentPart::Style, ComponentPart::Theme]),
                ModuleKind::Module,
            ),
            "dsh",
        );

        // every TypeScript file referencing the class uses the same name,
        // and no file mentions a stale spelling of the selector
        for file in plan.files() {
            if file.path.ends_with(".ts") && file.content.contains("UserCard") {
                assert!(
                    file.content.contains("UserCardComponent")
                        || file.content.contains("UserCardModule"),
                    "unexpected class reference in {}",
                    file.path
                );
            }
            assert!(!file.content.contains("dsh-usercard"));
            assert!(!file.content.contains("user_card"));
        }

        let barrel = plan.files().find(|f| f.path == "index.ts").unwrap();
        assert!(barrel.content.contains("./user-card.component"));
        assert!(barrel.content.contains("./user-card.module"));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let build = || {
            build_plan(
                &answers(Part::component([ComponentPart::Theme]), ModuleKind::Module),
                "dsh",
            )
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_prefix_flows_into_selector_only() {
        let plan = build_plan(&answers(Part::component([]), ModuleKind::PartOfModule), "mat");

        assert_eq!(plan.path, "user-card");
        let definition = plan.files().next().unwrap();
        assert!(definition.content.contains("selector: 'mat-user-card',"));
        assert!(definition.content.contains("export class UserCardComponent {}"));
    }
}

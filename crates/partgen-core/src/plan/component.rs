//! Component file set builder
//!
//! Decides which of the component's optional files get emitted and keeps
//! their cross-references consistent. The inline template content is
//! computed once and reused for both the embedded `template:` field and the
//! standalone `.html` file, so the two can never drift apart.

use crate::answers::{ComponentPart, PartKind};
use crate::naming::DerivedNames;
use crate::tree::FileNode;
use std::collections::BTreeSet;

/// The markup placed either inline in the decorator or in the standalone
/// template file. With `Theme` selected the child content gets a themed
/// wrapper keyed by the selector class.
pub(crate) fn inline_template(names: &DerivedNames, parts: &BTreeSet<ComponentPart>) -> String {
    if parts.contains(&ComponentPart::Theme) {
        format!(
            r#"<div class="{}">
  <ng-content></ng-content>
</div>"#,
            names.selector
        )
    } else {
        "<ng-content></ng-content>".to_string()
    }
}

/// Build the component's definition-related files, in emission order:
/// definition, style (iff Style), theme partial (iff Theme), template file
/// (iff Template).
pub(crate) fn component_files(
    names: &DerivedNames,
    parts: &BTreeSet<ComponentPart>,
) -> Vec<FileNode> {
    let stem = names.part_filename(PartKind::Component);
    let template = inline_template(names, parts);

    let mut files = vec![FileNode::new(
        format!("{}.ts", stem),
        definition_content(names, parts, &stem, &template),
    )];

    if parts.contains(&ComponentPart::Style) {
        files.push(FileNode::new(
            format!("{}.scss", stem),
            style_content(names, parts),
        ));
    }

    if parts.contains(&ComponentPart::Theme) {
        files.push(FileNode::new(
            format!("_{}.theme.scss", names.filename),
            theme_content(names),
        ));
    }

    if parts.contains(&ComponentPart::Template) {
        files.push(FileNode::new(format!("{}.html", stem), template));
    }

    files
}

fn definition_content(
    names: &DerivedNames,
    parts: &BTreeSet<ComponentPart>,
    stem: &str,
    template: &str,
) -> String {
    let mut decorator = format!("  selector: '{}',\n", names.selector);

    if parts.contains(&ComponentPart::Template) {
        decorator.push_str(&format!("  templateUrl: './{}.html',\n", stem));
    } else {
        decorator.push_str(&format!("  template: `{}`,\n", template));
    }

    if parts.contains(&ComponentPart::Style) {
        decorator.push_str(&format!("  styleUrls: ['./{}.scss'],\n", stem));
    }

    format!(
        r#"import {{ Component }} from '@angular/core';

@Component({{
{decorator}}})
export class {class} {{}}
"#,
        decorator = decorator,
        class = names.part_class_name(PartKind::Component)
    )
}

fn style_content(names: &DerivedNames, parts: &BTreeSet<ComponentPart>) -> String {
    if parts.contains(&ComponentPart::Theme) {
        format!(
            r#":host {{
  .{} {{
  }}
}}
"#,
            names.selector
        )
    } else {
        ":host {\n}\n".to_string()
    }
}

fn theme_content(names: &DerivedNames) -> String {
    format!(
        r#"@import '~@angular/material/theming';

@mixin {selector}-theme($theme) {{
  .{selector} {{
  }}
}}

@mixin {selector}-typography($config) {{
  .{selector} {{
  }}
}}
"#,
        selector = names.selector
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> DerivedNames {
        DerivedNames::derive("dsh", "user card")
    }

    fn parts(selected: &[ComponentPart]) -> BTreeSet<ComponentPart> {
        selected.iter().copied().collect()
    }

    #[test]
    fn test_no_parts_emits_single_inline_definition() {
        let files = component_files(&names(), &parts(&[]));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "user-card.component.ts");
        assert!(files[0].content.contains("selector: 'dsh-user-card',"));
        assert!(files[0]
            .content
            .contains("template: `<ng-content></ng-content>`,"));
        assert!(!files[0].content.contains("templateUrl"));
        assert!(!files[0].content.contains("styleUrls"));
        assert!(!files[0].content.contains("<div"));
    }

    #[test]
    fn test_all_parts_emit_four_files_in_order() {
        let all = parts(&[
            ComponentPart::Template,
            ComponentPart::Style,
            ComponentPart::Theme,
        ]);
        let files = component_files(&names(), &all);

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "user-card.component.ts",
                "user-card.component.scss",
                "_user-card.theme.scss",
                "user-card.component.html",
            ]
        );
    }

    #[test]
    fn test_template_file_matches_inline_content_exactly() {
        let all = parts(&[ComponentPart::Template, ComponentPart::Theme]);
        let files = component_files(&names(), &all);

        let html = files.iter().find(|f| f.path.ends_with(".html")).unwrap();
        assert_eq!(html.content, inline_template(&names(), &all));
        // the definition references the file instead of embedding
        assert!(files[0]
            .content
            .contains("templateUrl: './user-card.component.html',"));
        assert!(!files[0].content.contains("template: `"));
    }

    #[test]
    fn test_theme_wraps_inline_template() {
        let themed = inline_template(&names(), &parts(&[ComponentPart::Theme]));
        assert_eq!(
            themed,
            "<div class=\"dsh-user-card\">\n  <ng-content></ng-content>\n</div>"
        );
    }

    #[test]
    fn test_style_only_keeps_style_urls_and_empty_host_rule() {
        let files = component_files(&names(), &parts(&[ComponentPart::Style]));

        assert_eq!(files.len(), 2);
        assert!(files[0]
            .content
            .contains("styleUrls: ['./user-card.component.scss'],"));
        assert_eq!(files[1].path, "user-card.component.scss");
        assert_eq!(files[1].content, ":host {\n}\n");
    }

    #[test]
    fn test_theme_nests_selector_rule_in_style_file() {
        let files = component_files(
            &names(),
            &parts(&[ComponentPart::Style, ComponentPart::Theme]),
        );

        let scss = files
            .iter()
            .find(|f| f.path.ends_with(".scss") && !f.path.starts_with('_'))
            .unwrap();
        assert_eq!(scss.content, ":host {\n  .dsh-user-card {\n  }\n}\n");
    }

    #[test]
    fn test_theme_partial_without_style_file() {
        let files = component_files(&names(), &parts(&[ComponentPart::Theme]));

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["user-card.component.ts", "_user-card.theme.scss"]
        );

        let theme = &files[1].content;
        assert!(theme.starts_with("@import '~@angular/material/theming';"));
        assert!(theme.contains("@mixin dsh-user-card-theme($theme)"));
        assert!(theme.contains("@mixin dsh-user-card-typography($config)"));
        assert_eq!(theme.matches(".dsh-user-card {").count(), 2);
    }
}

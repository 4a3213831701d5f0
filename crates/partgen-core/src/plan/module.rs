//! Module wrapper builder
//!
//! Appends the module definition and barrel file after the part's own files.
//! Components and pipes are declared and exported; services are provided.
//! The two lists are mutually exclusive.

use crate::answers::{Part, PartKind};
use crate::naming::DerivedNames;
use crate::tree::FileNode;

/// Build the wrapper files, in emission order: module definition, then barrel
pub(crate) fn module_files(names: &DerivedNames, part: &Part) -> Vec<FileNode> {
    vec![
        FileNode::new(
            format!("{}.module.ts", names.filename),
            module_content(names, part),
        ),
        FileNode::new("index.ts", barrel_content(names, part.kind())),
    ]
}

fn module_content(names: &DerivedNames, part: &Part) -> String {
    let kind = part.kind();
    let part_class = names.part_class_name(kind);

    let registration = if kind == PartKind::Service {
        format!("  providers: [{}],\n", part_class)
    } else {
        format!(
            "  declarations: [{class}],\n  exports: [{class}],\n",
            class = part_class
        )
    };

    format!(
        r#"import {{ NgModule }} from '@angular/core';
import {{ CommonModule }} from '@angular/common';

import {{ {part_class} }} from './{stem}';

@NgModule({{
  imports: [CommonModule],
{registration}}})
export class {class_name}Module {{}}
"#,
        part_class = part_class,
        stem = names.part_filename(kind),
        registration = registration,
        class_name = names.class_name
    )
}

/// Barrel re-exporting the part definition and the module itself
fn barrel_content(names: &DerivedNames, kind: PartKind) -> String {
    format!(
        "export * from './{}';\nexport * from './{}.module';\n",
        names.part_filename(kind),
        names.filename
    )
}

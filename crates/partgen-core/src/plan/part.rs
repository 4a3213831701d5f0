//! Part file set builder
//!
//! Dispatches over the part kind. Components get their definition files plus
//! a spec stub, pipes get a definition plus a spec stub, services get a
//! single definition file and no spec stub.

use crate::answers::{Part, PartKind};
use crate::naming::DerivedNames;
use crate::tree::FileNode;

/// Build the part's own files, in emission order
pub(crate) fn part_files(names: &DerivedNames, part: &Part) -> Vec<FileNode> {
    match part {
        Part::Component { parts } => {
            let mut files = super::component::component_files(names, parts);
            files.push(FileNode::new(
                format!("{}.spec.ts", names.part_filename(PartKind::Component)),
                component_spec_content(names),
            ));
            files
        }
        Part::Service => {
            vec![FileNode::new(
                format!("{}.ts", names.part_filename(PartKind::Service)),
                service_content(names),
            )]
        }
        Part::Pipe => {
            vec![
                FileNode::new(
                    format!("{}.ts", names.part_filename(PartKind::Pipe)),
                    pipe_content(names),
                ),
                FileNode::new(
                    format!("{}.spec.ts", names.part_filename(PartKind::Pipe)),
                    pipe_spec_content(names),
                ),
            ]
        }
    }
}

/// Spec stub with a host wrapper referencing the generated selector and two
/// empty test groups
fn component_spec_content(names: &DerivedNames) -> String {
    format!(
        r#"import {{ Component }} from '@angular/core';

import {{ {class} }} from './{stem}';

@Component({{
  template: `<{selector}></{selector}>`,
}})
class TestHostComponent {{}}

describe('{class}', () => {{
  describe('methods', () => {{
  }});

  describe('template', () => {{
  }});
}});
"#,
        class = names.part_class_name(PartKind::Component),
        stem = names.part_filename(PartKind::Component),
        selector = names.selector
    )
}

fn service_content(names: &DerivedNames) -> String {
    format!(
        r#"import {{ Injectable }} from '@angular/core';

@Injectable()
export class {} {{
  constructor() {{}}
}}
"#,
        names.part_class_name(PartKind::Service)
    )
}

/// Pipe definition with an identity transform; the pipe name is the
/// camel-case form of the raw name
fn pipe_content(names: &DerivedNames) -> String {
    format!(
        r#"import {{ Pipe, PipeTransform }} from '@angular/core';

@Pipe({{
  name: '{name}',
}})
export class {class} implements PipeTransform {{
  transform(value: any): any {{
    return value;
  }}
}}
"#,
        name = names.camel_case_name,
        class = names.part_class_name(PartKind::Pipe)
    )
}

fn pipe_spec_content(names: &DerivedNames) -> String {
    format!(
        r#"import {{ {class} }} from './{stem}';

describe('{class}', () => {{
  const pipe = new {class}();

  describe('methods', () => {{
  }});
}});
"#,
        class = names.part_class_name(PartKind::Pipe),
        stem = names.part_filename(PartKind::Pipe)
    )
}

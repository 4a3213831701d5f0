//! Derived-name computation
//!
//! Every generated file cross-references the same four strings derived from
//! the raw part name and the configured selector prefix. They are computed
//! once per invocation and threaded through all content builders, so the
//! class name in a definition file always matches the one its spec file
//! imports.

use crate::answers::PartKind;

/// The four derived strings shared by every file in one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Dash-cased file stem, e.g. `user-card`
    pub filename: String,
    /// Prefixed dash-cased selector, e.g. `dsh-user-card`
    pub selector: String,
    /// Capitalized camel-case class stem, e.g. `UserCard`
    pub class_name: String,
    /// Camel-case identifier, e.g. `userCard`
    pub camel_case_name: String,
}

impl DerivedNames {
    /// Derive the name set from a raw free-text name and a selector prefix.
    /// Pure and total for any non-empty printable input; blank input is
    /// rejected before this point.
    pub fn derive(prefix: &str, name: &str) -> Self {
        let camel_case_name = camel_case(name);
        Self {
            filename: dash_case(name),
            selector: dash_case(&format!("{}-{}", prefix, name)),
            class_name: capitalize(&camel_case_name),
            camel_case_name,
        }
    }

    /// Class name for a part kind, e.g. `UserCardComponent`
    pub fn part_class_name(&self, kind: PartKind) -> String {
        format!("{}{}", self.class_name, kind.display_name())
    }

    /// File stem for a part kind, e.g. `user-card.component`
    pub fn part_filename(&self, kind: PartKind) -> String {
        format!("{}.{}", self.filename, kind.label())
    }
}

/// Split free-text input into lower-cased words. Any non-alphanumeric
/// character is a separator, and a lower-case-or-digit to upper-case
/// transition starts a new word, so `user card`, `user-card` and `userCard`
/// all split identically.
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            words.push(std::mem::take(&mut current));
        }

        current.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Lower-case words joined by hyphens: `user card` -> `user-card`
pub fn dash_case(input: &str) -> String {
    words(input).join("-")
}

/// First word lower-case, subsequent words capitalized: `user card` -> `userCard`
pub fn camel_case(input: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Upper-case the first character: `userCard` -> `UserCard`
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Verbatim span shielding.
//!
//! Backtick spans and two-space-indented blocks must survive the
//! substitution rules untouched, so they are cut out before any rule runs
//! and restored once every rule is done. Each span is replaced by a
//! placeholder built from a per-call random token and the span's vault
//! index; the token is fresh per call, so concurrent translations cannot
//! collide and literal input text cannot impersonate a placeholder.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use uuid::Uuid;

// A verbatim span is a maximal run of lines indented by at least two spaces
// or tabs, or a single-line backtick span whose closing backtick is not
// escaped.
static VERBATIM_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"(?m)((?:^[ \t]{2}.*\n)+|`.*?[^\\]`)", "valid verbatim regex");

fn escape_braces(text: &str) -> String {
    text.replace('{', "\\{").replace('}', "\\}")
}

/// Holds the literal spans extracted from one document.
///
/// Created empty for each translation call, populated by [`extract`] and
/// consumed by [`reinsert`].
///
/// [`extract`]: VerbatimVault::extract
/// [`reinsert`]: VerbatimVault::reinsert
pub struct VerbatimVault {
    token: String,
    entries: Vec<Option<String>>,
}

impl VerbatimVault {
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            entries: Vec::new(),
        }
    }

    /// Replace every verbatim span in `src` with an indexed placeholder,
    /// recording the literal text at that index.
    pub fn extract(&mut self, src: &str) -> String {
        VERBATIM_RE
            .replace_all(src, |caps: &Captures<'_>| {
                let index = self.entries.len();
                self.entries.push(Some(caps[1].to_string()));
                format!("{}{index}!", self.token)
            })
            .into_owned()
    }

    /// Resolve every placeholder in `text` back to a verbatim construct.
    ///
    /// Multi-line entries become `minted` blocks and are consumed on first
    /// use; each such index is assumed to be referenced by exactly one
    /// placeholder. Single-line entries become `\texttt{\lstinline{…}}` with
    /// the backtick delimiters stripped. A placeholder whose entry is
    /// missing or already consumed is left in the text untouched.
    pub fn reinsert(&mut self, text: &str) -> String {
        let placeholder_re = Regex::new(&format!(r"{}(\d+)!", regex::escape(&self.token)))
            .expect("valid placeholder regex");
        placeholder_re
            .replace_all(text, |caps: &Captures<'_>| {
                let Ok(index) = caps[1].parse::<usize>() else {
                    return caps[0].to_string();
                };
                let Some(slot) = self.entries.get_mut(index) else {
                    return caps[0].to_string();
                };
                let Some(content) = slot.as_deref() else {
                    return caps[0].to_string();
                };
                let escaped = escape_braces(content);
                if content.contains('\n') {
                    *slot = None;
                    format!(
                        "\\begin{{minted}}[fontsize=\\small]{{latex}}\n{escaped}\n\\end{{minted}}"
                    )
                } else {
                    format!("\\texttt{{\\lstinline{{{}}}}}", escaped.trim_matches('`'))
                }
            })
            .into_owned()
    }
}

impl Default for VerbatimVault {
    fn default() -> Self {
        Self::new()
    }
}

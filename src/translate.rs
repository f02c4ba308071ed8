//! The translation driver.

use crate::rules::{self, Rule};
use crate::verbatim::VerbatimVault;

/// Translate markdown-dialect `src` into LaTeX source.
///
/// `extra_rules` are caller-specific rules (slide-deck rules, report rules)
/// applied before the built-in sequence. `header` and `footer` are opaque
/// strings concatenated verbatim around the transformed body.
///
/// Verbatim spans are extracted before any rule runs, so markup-like
/// characters inside code are never reinterpreted, and reinserted after
/// every rule has run, so no rule can mutate a placeholder.
///
/// # Examples
///
/// ```
/// let tex = mdtex::translate(&[], "say **hi** now\n", "", "");
/// assert_eq!(tex, "say \\textbf{hi} now\n");
/// ```
#[must_use]
pub fn translate(extra_rules: &[Rule], src: &str, header: &str, footer: &str) -> String {
    let mut vault = VerbatimVault::new();
    let shielded = vault.extract(src);
    let transformed = rules::apply(extra_rules, &shielded);
    let body = vault.reinsert(&transformed);
    format!("{header}{body}{footer}")
}

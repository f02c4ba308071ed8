//! The ordered substitution rules driving the translation.
//!
//! Every rule is a global, multiline, dot-matches-newline regex substitution
//! over the whole document. Rules run in strict sequence, so later rules see
//! the output of earlier ones. The order encodes several constraints: the
//! table rule must see raw table rows before linebreak doubling separates
//! them, the math rule must run after dollar escaping, and the includers
//! must claim `!(…)` references before the generic link rule can.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{include, math, table};

/// How a [`Rule`] rewrites each match.
pub enum Replacement {
    /// A literal template with `$n` back-reference placeholders.
    Template(String),
    /// A handler from the captured match to the text spliced in.
    Handler(fn(&Captures<'_>) -> String),
}

/// A single (pattern, replacement) substitution applied over the text.
pub struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Build a rule with a literal replacement template.
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regex.
    #[must_use]
    pub fn template(pattern: &str, template: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid rule pattern"),
            replacement: Replacement::Template(template.into()),
        }
    }

    /// Build a rule whose replacement is computed per match.
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regex.
    #[must_use]
    pub fn handler(pattern: &str, handler: fn(&Captures<'_>) -> String) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid rule pattern"),
            replacement: Replacement::Handler(handler),
        }
    }

    /// Apply the rule globally over `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match &self.replacement {
            Replacement::Template(template) => {
                self.pattern.replace_all(text, template.as_str()).into_owned()
            }
            Replacement::Handler(handler) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| handler(caps))
                .into_owned(),
        }
    }
}

static BUILTIN: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // LaTeX hates unescaped characters.
        Rule::template(r"(?ms)([$#%])", r"\$1"),
        // Tables as such:
        //
        // | Header 1 | Header 2 | Header 3 |
        // |---------:|:--------:|:---------|
        // | Value    |   Value  |    Value |
        //
        // The preceding blank line (or start of input) is captured and
        // re-emitted in lieu of a lookbehind.
        Rule::handler(r"(?ms)(\A|\n\n)((?:^\|.+?\|\n)+)", table::rule),
        // Replace single linebreaks with double linebreaks.
        Rule::template(r"(?ms)([^\n])\n([^\n])", "$1\n\n$2"),
        // Annotations using {text}(annotation) syntax. Hackish because we
        // enter math mode needlessly, but there is no better construct.
        Rule::template(
            r"(?ms)\{([^\n]+?)\}\(([^\n]+?)\)",
            r"$$\underbrace{\text{$1}}_{\text{$2}}$$",
        ),
        // Two dollars start math mode; the dollars were escaped above.
        Rule::handler(r"(?ms)\\\$\\\$([^$]+?)\\\$\\\$", math::rule),
        // Simple images using !(image.jpg) syntax.
        Rule::handler(
            r"(?ms)^!\(([^)]+?\.(?:jpg|jpeg|gif|png|bmp|pdf|tif))\)$",
            include::image_rule,
        ),
        // LaTeX embedding with !(text.tex) syntax.
        Rule::handler(r"(?ms)^!\(([^)]+?\.tex)\)$", include::document_rule),
        // Code embedding with !(code.py) syntax.
        Rule::handler(r"(?ms)^!\(([^)]+?\.(\w+))\)$", include::source_rule),
        // Captioned images using ![caption](image.jpg) syntax.
        Rule::handler(r"(?ms)^!\[([^\]]+?)\]\(([^)]+?)\)$", include::figure_rule),
        // [Text links](example.org); the boundary characters are captured
        // and re-emitted in lieu of lookaround.
        Rule::template(
            r"(?ms)(^|\W)\[([^\]]*)\]\(([^)]+?)\)(\W|$)",
            r"$1\href{$3}{\underline{$2}}$4",
        ),
        // Add \item to each bullet point.
        Rule::template(r"(?ms)^- ?([^-][^\n]*)$", r"\item $1"),
        // Begin and end itemize around runs of bullet points.
        Rule::template(
            r"(?ms)((?:^\\item [^\n]+$(?:\\pause|\n)*){2,})",
            "\n\\begin{itemize}\n$1\n\\end{itemize}\n",
        ),
        // **bold**
        Rule::template(
            r"(?ms)(^|\W)\*\*(.+?)\*\*([^\w\d*]|$)",
            r"$1\textbf{$2}$3",
        ),
    ]
});

/// The built-in rule sequence.
#[must_use]
pub fn builtin() -> &'static [Rule] {
    &BUILTIN
}

/// Apply `extra_rules`, then the built-in rules, in strict sequence.
#[must_use]
pub fn apply(extra_rules: &[Rule], text: &str) -> String {
    let mut text = text.to_string();
    for rule in extra_rules.iter().chain(builtin().iter()) {
        text = rule.apply(&text);
    }
    text
}

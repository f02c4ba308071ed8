//! `$$…$$` math expression conversion.
//!
//! The token table is applied by plain left-to-right string replacement, not
//! regex, and its order is significant: multi-character tokens must come
//! before the shorter tokens they contain (`!<=` before `<=`), or the short
//! replacement would fire inside the long token first.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Ordered (token, command) rewrite table for math expressions.
pub const TOKENS: &[(&str, &str)] = &[
    ("*", r"\cdot"),
    ("~~", r"\approx"),
    ("~=", r"\cong"),
    ("==", r"\equiv"),
    ("!=", r"\neq"),
    ("!<=", r"\nleq"),
    ("!>=", r"\ngeq"),
    ("<=", r"\leq"),
    (">=", r"\geq"),
    ("+-", r"\pm"),
    (" <-> ", r"\leftrightarrow"),
    (" <=> ", r"\Leftrightarrow"),
    (" |-> ", r"\mapsto"),
    (" <- ", r"\leftarrow"),
    (" <= ", r"\Leftarrow"),
    (" -> ", r"\rightarrow"),
    (" => ", r"\Rightarrow"),
    (" in ", r" \in "),
    (" mod ", r" \mod "),
    ("(", r"\left("),
    (")", r"\right)"),
    ("[", r"\left["),
    ("]", r"\right]"),
];

static NUMBER_RE: LazyLock<Regex> = crate::lazy_regex!(r"(-?\d+)", "valid number regex");

static FUNCTION_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"(^|[^a-zA-Z])(log|sin|cos|tan|lim|gcd|ln)([^a-zA-Z]|$)",
    "valid function regex",
);

static INFINITY_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"(^|[^a-zA-Z])inf([^a-zA-Z]|$)", "valid infinity regex");

static LINEBREAK_RE: LazyLock<Regex> = crate::lazy_regex!(r"\n+", "valid linebreak regex");

/// Convert the text between the `$$` delimiters into LaTeX math.
///
/// Single-line expressions become an inline `$…$` span; multi-line
/// expressions become an unnumbered `gather*` display, wrapped in `aligned`
/// when any line carries an `&` alignment marker.
#[must_use]
pub fn convert(expr: &str) -> String {
    let multiline = expr.contains('\n');
    let text = expr.trim();
    // Group numbers to avoid problems with x^123.
    let text = NUMBER_RE.replace_all(text, "{$1}");
    // Function names before the token table, so the brackets inserted by the
    // table are never corrupted.
    let text = FUNCTION_RE.replace_all(&text, r"$1\$2$3");
    let mut text = INFINITY_RE.replace_all(&text, r"$1\infty$2").into_owned();
    for (token, command) in TOKENS {
        text = text.replace(token, &format!(" {command} "));
    }
    if multiline {
        let text = LINEBREAK_RE.replace_all(&text, "\\\\\n");
        let text = text.trim_matches('\n');
        let body = if text.contains('&') {
            format!("\\begin{{aligned}}\n{text}\n\\end{{aligned}}")
        } else {
            text.to_string()
        };
        format!("\\begin{{gather*}}\n{body}\n\\end{{gather*}}")
    } else {
        format!("${text}$")
    }
}

pub(crate) fn rule(caps: &Captures<'_>) -> String {
    convert(&caps[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_expression_is_wrapped_in_dollars() {
        let out = convert("x >= 5");
        assert!(out.starts_with('$'));
        assert!(out.ends_with('$'));
        assert!(out.contains("\\geq"));
        assert!(out.contains("{5}"));
    }

    #[test]
    fn long_tokens_win_over_their_substrings() {
        let out = convert("a !<= b");
        assert!(out.contains("\\nleq"));
        assert!(!out.contains("\\leq "));
    }

    #[test]
    fn function_names_become_commands() {
        assert_eq!(convert("sin x"), "$\\sin x$");
    }

    #[test]
    fn inf_becomes_infty() {
        let out = convert("x -> inf");
        assert!(out.contains("\\rightarrow"));
        assert!(out.contains("\\infty"));
    }

    #[test]
    fn brackets_are_sized() {
        let out = convert("(a + b)");
        assert!(out.contains("\\left("));
        assert!(out.contains("\\right)"));
    }

    #[test]
    fn multiline_expression_becomes_gather() {
        let out = convert("a = b\nc = d");
        assert!(out.starts_with("\\begin{gather*}\n"));
        assert!(out.ends_with("\n\\end{gather*}"));
        assert!(out.contains("\\\\\n"));
        assert!(!out.contains("aligned"));
    }

    #[test]
    fn alignment_markers_add_aligned_environment() {
        let out = convert("a &= b\nc &= d");
        assert!(out.contains("\\begin{aligned}"));
        assert!(out.contains("\\end{aligned}"));
    }

    #[test]
    fn numbers_are_grouped() {
        assert_eq!(convert("x^123"), "$x^{123}$");
    }
}

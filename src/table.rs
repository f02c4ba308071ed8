//! Pipe-table to `tabular` conversion.
//!
//! A table block is a run of lines each wrapped in `|`: a header row, an
//! alignment row and zero or more data rows. The alignment row collapses to
//! one `l`/`c`/`r` character per column; markers that match none of the
//! three forms contribute nothing. Malformed blocks degrade rather than
//! fail.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LEADING_PIPE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"(^|\n)\|\s*", "valid leading pipe regex");

static TRAILING_PIPE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"\s*\|(\n|$)", "valid trailing pipe regex");

static INNER_PIPE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"\s*\|\s*", "valid inner pipe regex");

static CENTRE_RE: LazyLock<Regex> = crate::lazy_regex!(r":-+: ", "valid centre marker regex");

static RIGHT_RE: LazyLock<Regex> = crate::lazy_regex!(r"-+: ", "valid right marker regex");

static LEFT_RE: LazyLock<Regex> = crate::lazy_regex!(r":?-+ ", "valid left marker regex");

/// Convert one pipe-table block (newline-terminated lines) into a LaTeX
/// `table`/`tabular` environment.
///
/// Blocks without an alignment row are returned unchanged.
#[must_use]
pub fn convert(block: &str) -> String {
    let text = LEADING_PIPE_RE.replace_all(block, "$1");
    let text = TRAILING_PIPE_RE.replace_all(&text, " \\\\$1");
    let text = INNER_PIPE_RE.replace_all(&text, " & ");

    let mut lines = text.split('\n');
    let (Some(header), Some(alignment)) = (lines.next(), lines.next()) else {
        return block.to_string();
    };
    let content = lines.collect::<Vec<_>>().join("\n");

    let spec = CENTRE_RE.replace_all(alignment, "c");
    let spec = RIGHT_RE.replace_all(&spec, "r");
    let spec = LEFT_RE.replace_all(&spec, "l");
    // Drop whatever the markers left behind, spaces included.
    let spec: String = spec.chars().filter(|c| matches!(c, 'l' | 'c' | 'r')).collect();

    format!(
        "\n\\begin{{table}}\n\\begin{{tabular}}{{{spec}}}\n\\toprule\n{header}\n\\midrule\n{content}\n\\bottomrule\n\\end{{tabular}}\n\\end{{table}}\n"
    )
}

pub(crate) fn rule(caps: &Captures<'_>) -> String {
    format!("{}{}", &caps[1], convert(&caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_header_alignment_and_data() {
        let out = convert("|H1|H2|\n|:-:|---:|\n|a|b|\n");
        assert!(out.contains("\\begin{tabular}{cr}"));
        assert!(out.contains("H1 & H2 \\\\"));
        assert!(out.contains("a & b \\\\"));
        assert!(out.contains("\\toprule"));
        assert!(out.contains("\\bottomrule"));
    }

    #[test]
    fn left_markers_map_to_l() {
        let out = convert("|A|B|\n|:---|----|\n|1|2|\n");
        assert!(out.contains("\\begin{tabular}{ll}"));
    }

    #[test]
    fn unrecognized_markers_contribute_nothing() {
        let out = convert("|A|\n|===|\n|1|\n");
        assert!(out.contains("\\begin{tabular}{}"));
    }

    #[test]
    fn block_without_alignment_row_is_unchanged() {
        assert_eq!(convert("|A|"), "|A|");
    }
}

//! Image, document and source inclusion directives.
//!
//! Paths are resolved to absolute, forward-slash form before being embedded
//! in the emitted directive. Resolution never fails the translation: a path
//! that cannot be made absolute is used as given.

use regex::Captures;

/// Language tags recognised by the syntax highlighter.
pub const LANGUAGES: &[&str] = &[
    "cucumber", "abap", "ada", "ahk", "antlr", "apacheconf", "applescript", "as", "aspectj",
    "autoit", "asy", "awk", "basemake", "bash", "bat", "bbcode", "befunge", "bmax", "boo",
    "brainfuck", "bro", "bugs", "c", "ceylon", "cfm", "cfs", "cheetah", "clj", "cmake", "cobol",
    "cl", "console", "control", "coq", "cpp", "croc", "csharp", "css", "cuda", "cyx", "d", "dg",
    "diff", "django", "dpatch", "duel", "dylan", "ec", "erb", "evoque", "fan", "fancy", "fortran",
    "gas", "genshi", "glsl", "gnuplot", "go", "gosu", "groovy", "gst", "haml", "haskell", "hxml",
    "html", "http", "hx", "idl", "irc", "ini", "java", "jade", "js", "json", "jsp", "kconfig",
    "koka", "lasso", "livescrit", "llvm", "logos", "lua", "mako", "mason", "matlab", "minid",
    "monkey", "moon", "mxml", "myghty", "mysql", "nasm", "newlisp", "newspeak", "numpy", "ocaml",
    "octave", "ooc", "perl", "php", "plpgsql", "postgresql", "postscript", "pot", "prolog",
    "psql", "puppet", "python", "qml", "ragel", "raw", "ruby", "rhtml", "sass", "scheme",
    "smalltalk", "sql", "ssp", "tcl", "tea", "tex", "text", "vala", "vgl", "vim", "xml",
    "xquery", "yaml",
];

const FALLBACK_LANGUAGE: &str = "latex";

/// Validate a language tag against the allow-list, falling back to a tag the
/// highlighter always accepts.
#[must_use]
pub fn resolve_language(tag: &str) -> &str {
    if LANGUAGES.contains(&tag) {
        tag
    } else {
        FALLBACK_LANGUAGE
    }
}

/// Absolute, forward-slash form of `path`; the path itself on failure.
fn absolute(path: &str) -> String {
    match std::path::absolute(path) {
        Ok(abs) => abs.to_string_lossy().replace('\\', "/"),
        Err(_) => path.replace('\\', "/"),
    }
}

/// Centred, size-constrained image block for an uncaptioned reference.
#[must_use]
pub fn image(path: &str) -> String {
    let path = absolute(path);
    format!(
        "\n\\begin{{center}}\n\\includegraphics[width=\\linewidth,height=0.8\\textheight,keepaspectratio]{{{path}}}\n\\end{{center}}\n"
    )
}

/// Numbered figure block with a caption line.
#[must_use]
pub fn figure(caption: &str, path: &str) -> String {
    let path = absolute(path);
    format!(
        "\n\\begin{{figure}}\n\\begin{{center}}\n\\includegraphics[width=\\linewidth,height=0.7\\textheight,keepaspectratio]{{{path}}}\n\\caption{{{caption}}}\n\\end{{center}}\n\\end{{figure}}\n"
    )
}

/// `\input` directive for an embedded LaTeX document.
#[must_use]
pub fn document(path: &str) -> String {
    format!("\\input{{{}}}", absolute(path))
}

/// `\inputminted` directive with a validated language tag.
#[must_use]
pub fn source(path: &str, tag: &str) -> String {
    let language = resolve_language(tag);
    format!(
        "\\inputminted[fontsize=\\small]{{{language}}}{{{}}}",
        absolute(path)
    )
}

pub(crate) fn image_rule(caps: &Captures<'_>) -> String {
    image(&caps[1])
}

pub(crate) fn figure_rule(caps: &Captures<'_>) -> String {
    figure(&caps[1], &caps[2])
}

pub(crate) fn document_rule(caps: &Captures<'_>) -> String {
    document(&caps[1])
}

pub(crate) fn source_rule(caps: &Captures<'_>) -> String {
    source(&caps[1], &caps[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_tags_pass_through() {
        assert_eq!(resolve_language("c"), "c");
        assert_eq!(resolve_language("python"), "python");
        assert_eq!(resolve_language("haskell"), "haskell");
    }

    #[test]
    fn unlisted_tags_fall_back() {
        assert_eq!(resolve_language("rs"), "latex");
        assert_eq!(resolve_language("py"), "latex");
        assert_eq!(resolve_language("e"), "latex");
        assert_eq!(resolve_language("C"), "latex");
    }

    #[test]
    fn image_block_uses_absolute_path() {
        let out = image("pics/cat.png");
        assert!(out.contains("\\includegraphics"));
        assert!(out.contains("/pics/cat.png}"));
    }

    #[test]
    fn figure_block_carries_caption() {
        let out = figure("A cat", "cat.jpg");
        assert!(out.contains("\\begin{figure}"));
        assert!(out.contains("\\caption{A cat}"));
        assert!(out.contains("/cat.jpg}"));
    }

    #[test]
    fn document_emits_input() {
        let out = document("ch/intro.tex");
        assert!(out.starts_with("\\input{"));
        assert!(out.ends_with("/ch/intro.tex}"));
    }

    #[test]
    fn source_validates_language() {
        let listed = source("main.c", "c");
        assert!(listed.contains("{c}{"));
        let unlisted = source("main.zig", "zig");
        assert!(unlisted.contains("{latex}{"));
    }
}

//! Library for translating a simplified markdown dialect into LaTeX.
//!
//! The translation is a single pass of ordered regex substitutions over the
//! document text: verbatim spans (backtick code, indented blocks) are cut
//! out first, every rule runs in sequence, the verbatim spans are restored,
//! and the result is framed by caller-supplied header and footer strings.
//! Malformed markup degrades the output rather than failing the call.

mod macros;

pub mod include;
pub mod math;
pub mod rules;
pub mod table;
pub mod translate;
pub mod verbatim;

pub use rules::{Replacement, Rule};
pub use translate::translate;
pub use verbatim::VerbatimVault;

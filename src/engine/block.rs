//! @dose
//! purpose: Multi-line block-comment toggling. A span starts at a line whose
//!     stripped content begins with the block start marker and runs to the
//!     nearest end marker, across line boundaries.
//!
//! when-editing:
//!     - !Span matching is shortest-match; an inner block's boundary ends the
//!       span early
//!     - !Strict mode turns that silent truncation into an error
//!     - Markers are regex-escaped before being embedded in the span scanner
//!
//! invariants:
//!     - Profiles without an end marker have no spans; the document is unchanged
//!     - uncomment strips exactly one start marker and one end marker per span
//!
//! gotchas:
//!     - Nesting is not modeled; `/* outer /* inner */` matches through the
//!       first end marker
//!     - A start marker mid-line does not open a span

use regex::Regex;
use thiserror::Error;

use super::Action;
use crate::document::Document;
use crate::profile::CommentProfile;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("invalid block markers: {0}")]
    Marker(#[from] regex::Error),
    #[error("nested block comment at line {line}; rerun without --strict to accept the shortest span")]
    NestedBlock { line: usize },
}

/// Build the span scanner: line-anchored start marker through the nearest
/// end marker, shortest match, dot matching newlines.
fn span_regex(start: &str, end: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?ms)^[ \t]*{}.*?{}",
        regex::escape(start),
        regex::escape(end)
    ))
}

/// Strip one leading start marker (plus following whitespace) and one
/// trailing end marker (plus preceding whitespace) from a span, keeping the
/// span's own indentation.
fn unwrap_span(span: &str, start: &str, end: &str) -> String {
    let idx = span
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(span.len());
    let (indent, rest) = span.split_at(idx);
    let rest = rest.strip_prefix(start).unwrap_or(rest);
    let rest = rest.trim_start();
    let rest = rest.strip_suffix(end).unwrap_or(rest);
    format!("{indent}{}", rest.trim_end())
}

/// Toggle every block span in the document. Profiles without an end marker
/// have no spans and the document is left unchanged.
pub fn toggle_block(
    doc: &mut Document,
    profile: &CommentProfile,
    action: Action,
    strict: bool,
) -> Result<(), BlockError> {
    let Some((start, end)) = profile.block_markers() else {
        return Ok(());
    };
    let re = span_regex(start, end)?;
    let content = doc.content();

    if strict {
        for m in re.find_iter(content) {
            let span = m.as_str();
            let inner = m.start() + span.find(start).unwrap_or(0) + start.len();
            let interior = &content[inner..m.end().saturating_sub(end.len())];
            if interior.contains(start) {
                let line = content[..inner].matches('\n').count() + 1;
                return Err(BlockError::NestedBlock { line });
            }
        }
    }

    let rewritten = match action {
        // Spans begin at the start marker by construction, so an existing
        // block is never wrapped a second time.
        Action::Comment => re.replace_all(content, |caps: &regex::Captures| {
            let span = caps[0].to_string();
            if span.trim().starts_with(start) {
                span
            } else {
                format!("{start} {} {end}", span.trim())
            }
        }),
        Action::Uncomment => {
            re.replace_all(content, |caps: &regex::Captures| unwrap_span(&caps[0], start, end))
        }
    };

    let rewritten = rewritten.into_owned();
    doc.set_content(rewritten);
    Ok(())
}

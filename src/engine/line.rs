//! @dose
//! purpose: Per-line comment toggling. Each line is decomposed into leading
//!     whitespace, a stack of head comment markers (the comment level), the
//!     body, and any trailing inline comment, then reassembled around the
//!     requested action.
//!
//! when-editing:
//!     - !comment only touches lines that match and have comment level zero
//!     - !uncomment removes exactly one level and never consults the match criterion
//!     - Trailing inline comments are excluded from match testing and preserved
//!       verbatim
//!
//! invariants:
//!     - Lines the action does not apply to come back byte for byte
//!     - Whitespace-only lines never match
//!     - The comment-level loop is bounded by the line length
//!
//! do-not:
//!     - Never stack a second marker onto an already-commented line
//!
//! gotchas:
//!     - Block-style profiles wrap a single line as `start body end`; the end
//!       marker only exists on commented lines
//!     - Stacked markers may be separated by spaces or tabs, so `// //` and
//!       `////` both count as level 2

use super::Action;
use crate::pattern::MatchSpec;
use crate::profile::CommentProfile;

/// Split a line into its leading whitespace and the remainder.
fn split_indent(line: &str) -> (&str, &str) {
    let idx = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    line.split_at(idx)
}

/// Count stacked comment markers at the head of `rest` (the line with its
/// indentation removed). Markers may be separated by spaces or tabs, so
/// `//// x`, `// // x`, and `//  //  x` all count as level 2. The loop is
/// capped by the line length, which bounds it even for a line that is
/// nothing but marker repetitions.
pub fn comment_level(rest: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    let cap = rest.len();
    let mut level = 0;
    let mut cur = rest;
    while level < cap {
        match cur.strip_prefix(marker) {
            Some(next) => {
                level += 1;
                cur = next.trim_start_matches([' ', '\t']);
            }
            None => break,
        }
    }
    level
}

/// The portion of a level-zero line that match testing sees: everything up
/// to the first comment marker, which begins the trailing inline comment.
fn match_body<'a>(rest: &'a str, marker: &str) -> &'a str {
    match rest.find(marker) {
        Some(pos) => &rest[..pos],
        None => rest,
    }
}

/// Remove the first occurrence of the block end marker, along with a single
/// space before it, from a line body.
fn remove_end_marker(text: &str, end: &str) -> String {
    match text.find(end) {
        Some(pos) => {
            let before = text[..pos].strip_suffix(' ').unwrap_or(&text[..pos]);
            format!("{}{}", before, &text[pos + end.len()..])
        }
        None => text.to_string(),
    }
}

/// Apply `action` to a single line. Whitespace-only lines never match and
/// come back unchanged, as does any line the action does not apply to.
pub fn toggle_line(
    line: &str,
    profile: &CommentProfile,
    spec: &MatchSpec,
    action: Action,
) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }

    let (indent, rest) = split_indent(line);
    let marker = profile.line_start.as_str();
    let level = comment_level(rest, marker);

    match action {
        Action::Comment => {
            // Already-commented lines are never double-commented.
            if level > 0 || !spec.matches(match_body(rest, marker)) {
                return line.to_string();
            }
            match profile.block_markers() {
                // Block-style profiles produce a single-line annotated block:
                // `<!-- body -->`, `/* body */`.
                Some((start, end)) => format!("{indent}{start} {} {end}", rest.trim_end()),
                None => format!("{indent}{marker} {rest}"),
            }
        }
        Action::Uncomment => {
            if level == 0 {
                return line.to_string();
            }
            // One marker plus at most one space off the head; the rest of
            // the line, trailing inline comments included, is untouched.
            let stripped = rest.strip_prefix(marker).unwrap_or(rest);
            let stripped = stripped.strip_prefix(' ').unwrap_or(stripped);
            let body = match profile.block_markers() {
                Some((_, end)) => remove_end_marker(stripped, end),
                None => stripped.to_string(),
            };
            format!("{indent}{body}")
        }
    }
}

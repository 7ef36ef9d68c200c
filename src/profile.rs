//! @toon
//! purpose: Comment-syntax resolution: maps a file name to the marker pair
//!     used to comment and uncomment its lines. Provides the builtin rule
//!     table and the Resolver that layers user rules over it.
//!
//! when-editing:
//!     - !Exact-name rules win over extension rules within a rule set
//!     - !User rules (from linemark.toml) are consulted before the builtin table
//!     - When adding a file type, add it to BUILTIN_RULES
//!
//! invariants:
//!     - Resolution is a pure lookup with no IO
//!     - An unrecognized file resolves to // line comments unless the fallback
//!       is disabled
//!
//! gotchas:
//!     - Matching is case-sensitive; SCRIPT.PY is not a Python file
//!     - Extensions are stored without the leading dot (e.g., "py" not ".py")
//!     - Block-style profiles reuse the start marker for per-line detection

use once_cell::sync::Lazy;

/// The marker strings for one file type. Line-comment styles carry only
/// `line_start`; block styles carry all three, with `line_start` doubling as
/// the per-line detection marker (`<!--` for HTML, `/*` for CSS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentProfile {
    pub line_start: String,
    pub block_start: Option<String>,
    pub block_end: Option<String>,
}

impl CommentProfile {
    /// A line-comment profile such as `//` or `#`.
    pub fn line(marker: &str) -> Self {
        Self {
            line_start: marker.to_string(),
            block_start: None,
            block_end: None,
        }
    }

    /// A block-comment profile such as `<!-- -->` or `/* */`. The start
    /// marker is also the per-line detection marker.
    pub fn block(start: &str, end: &str) -> Self {
        Self {
            line_start: start.to_string(),
            block_start: Some(start.to_string()),
            block_end: Some(end.to_string()),
        }
    }

    /// Both markers of a block-style profile, or `None` for line styles.
    pub fn block_markers(&self) -> Option<(&str, &str)> {
        match (self.block_start.as_deref(), self.block_end.as_deref()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// How a single rule selects files: by exact file name or by final
/// dot-extension. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub enum FileMatch {
    Name(String),
    Ext(String),
}

/// One entry in the resolution table.
#[derive(Debug, Clone)]
pub struct ProfileRule {
    pub matcher: FileMatch,
    pub profile: CommentProfile,
}

impl ProfileRule {
    pub fn name(name: &str, profile: CommentProfile) -> Self {
        Self {
            matcher: FileMatch::Name(name.to_string()),
            profile,
        }
    }

    pub fn ext(ext: &str, profile: CommentProfile) -> Self {
        Self {
            matcher: FileMatch::Ext(ext.to_string()),
            profile,
        }
    }
}

static BUILTIN_RULES: Lazy<Vec<ProfileRule>> = Lazy::new(|| {
    let mut rules = vec![
        ProfileRule::name("Dockerfile", CommentProfile::line("#")),
        ProfileRule::name("Makefile", CommentProfile::line("#")),
    ];
    for ext in ["js", "jsx", "ts", "tsx", "c", "cpp", "cs", "java", "php"] {
        rules.push(ProfileRule::ext(ext, CommentProfile::line("//")));
    }
    for ext in ["py", "rb", "sh", "yml", "yaml"] {
        rules.push(ProfileRule::ext(ext, CommentProfile::line("#")));
    }
    for ext in ["html", "xml", "md"] {
        rules.push(ProfileRule::ext(ext, CommentProfile::block("<!--", "-->")));
    }
    for ext in ["css", "scss", "less"] {
        rules.push(ProfileRule::ext(ext, CommentProfile::block("/*", "*/")));
    }
    rules
});

/// The final dot-suffix of a file name, if any.
fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

fn scan(rules: &[ProfileRule], filename: &str) -> Option<CommentProfile> {
    let ext = extension(filename);

    // Exact names take precedence over extensions within a rule set.
    for rule in rules {
        if let FileMatch::Name(name) = &rule.matcher {
            if name == filename {
                return Some(rule.profile.clone());
            }
        }
    }
    for rule in rules {
        if let FileMatch::Ext(rule_ext) = &rule.matcher {
            if Some(rule_ext.as_str()) == ext {
                return Some(rule.profile.clone());
            }
        }
    }
    None
}

/// Resolves a file name to its comment profile. Pure lookup, no I/O.
pub struct Resolver {
    custom: Vec<ProfileRule>,
    use_default: bool,
}

impl Resolver {
    /// `custom` rules (typically from `linemark.toml`) are consulted before
    /// the builtin table. When `use_default` is false, unrecognized files
    /// resolve to `None` instead of the `//` fallback.
    pub fn new(custom: Vec<ProfileRule>, use_default: bool) -> Self {
        Self { custom, use_default }
    }

    pub fn resolve(&self, filename: &str) -> Option<CommentProfile> {
        scan(&self.custom, filename)
            .or_else(|| scan(&BUILTIN_RULES, filename))
            .or_else(|| {
                if self.use_default {
                    Some(CommentProfile::line("//"))
                } else {
                    None
                }
            })
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Vec::new(), true)
    }
}

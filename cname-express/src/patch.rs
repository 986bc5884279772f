//! Best-effort route registration in `app.js`.
//!
//! This is plain text insertion, not program editing. Each insertion is an
//! ordered list of rules `{anchor, text}`; the first anchor found in the file
//! wins. Anchors are literal markers left in the generated `app.js`, with
//! fallbacks for files the user has edited. When nothing matches, the caller
//! is expected to tell the user which lines to add by hand.

use std::sync::LazyLock;

use cname_core::FormattedName;
use regex::Regex;

use crate::files::{IMPORT_MARKER, NOT_FOUND_HANDLER, ROUTE_MARKER};

/// First block of consecutive `const x = require(...);` lines.
static REQUIRE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\nconst .* = require\(.*\);\s*)+").expect("require block pattern is valid")
});

/// Where an insertion goes relative to its anchor.
enum Anchor {
    /// On the line after a literal marker.
    AfterMarker(&'static str),
    /// After the last line of the first regex match.
    AfterPattern(&'static LazyLock<Regex>),
    /// Before a literal line, under a `// Routes` header.
    BeforeLine(&'static str),
}

impl Anchor {
    /// Insert `text` at this anchor, or `None` when the anchor is absent.
    fn insert(&self, content: &str, text: &str) -> Option<String> {
        match self {
            Anchor::AfterMarker(marker) => content
                .contains(marker)
                .then(|| content.replacen(marker, &format!("{marker}\n{text}"), 1)),
            Anchor::AfterPattern(pattern) => {
                let found = pattern.find(content)?;
                let end = found.start() + found.as_str().trim_end().len();
                Some(format!("{}\n{text}{}", &content[..end], &content[end..]))
            }
            Anchor::BeforeLine(line) => content
                .contains(line)
                .then(|| content.replacen(line, &format!("// Routes\n{text}\n\n{line}"), 1)),
        }
    }
}

fn import_anchors() -> [Anchor; 2] {
    [
        Anchor::AfterMarker(IMPORT_MARKER),
        Anchor::AfterPattern(&REQUIRE_BLOCK),
    ]
}

fn route_anchors() -> [Anchor; 2] {
    [
        Anchor::AfterMarker(ROUTE_MARKER),
        Anchor::BeforeLine(NOT_FOUND_HANDLER),
    ]
}

/// Outcome of patching an entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// A registration for the resource is already present.
    AlreadyRegistered,
    /// The patched file content.
    Applied(String),
    /// No anchor for the route line was found; the file must not be written.
    Unanchored,
}

/// The lines wiring a resource's router into `app.js`.
#[derive(Debug, Clone)]
pub struct RouteRegistration {
    pub mount_path: String,
    pub import_line: String,
    pub route_line: String,
    /// Single-line form also accepted as an existing registration.
    pub inline_route_line: String,
}

impl RouteRegistration {
    pub fn new(name: &FormattedName) -> Self {
        let lower = &name.lower;
        let mount_path = format!("/api/{}", name.plural);

        Self {
            import_line: format!("const {lower}Routes = require('./routes/{lower}.routes');"),
            route_line: format!("app.use('{mount_path}', {lower}Routes);"),
            inline_route_line: format!(
                "app.use('{mount_path}', require('./routes/{lower}.routes'));"
            ),
            mount_path,
        }
    }

    pub fn is_registered(&self, content: &str) -> bool {
        content.contains(&self.route_line) || content.contains(&self.inline_route_line)
    }

    /// Insert the import and route lines into `content`.
    ///
    /// The import is skipped when already present, and silently dropped when
    /// neither the marker nor a `require` block exists.
    pub fn apply(&self, content: &str) -> Patch {
        if self.is_registered(content) {
            return Patch::AlreadyRegistered;
        }

        let mut patched = content.to_string();
        if !patched.contains(&self.import_line) {
            if let Some(with_import) = first_insertion(&import_anchors(), &patched, &self.import_line)
            {
                patched = with_import;
            }
        }

        match first_insertion(&route_anchors(), &patched, &self.route_line) {
            Some(with_route) => Patch::Applied(with_route),
            None => Patch::Unanchored,
        }
    }
}

fn first_insertion(anchors: &[Anchor], content: &str, text: &str) -> Option<String> {
    anchors
        .iter()
        .find_map(|anchor| anchor.insert(content, text))
}

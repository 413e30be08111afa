use serde::Serialize;
use tracing::trace;

pub const DEPENDENCIES_SCOPE: &str = "dependencies";
pub const REPOSITORIES_SCOPE: &str = "repositories";
pub const PRODUCT_FLAVORS_SCOPE: &str = "productFlavors";

/// A named, brace-balanced block located in build-script text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeSpan {
    pub scope_name: String,
    /// Byte offset of the scope name
    pub start: usize,
    /// One past the closing brace of the block
    pub end: usize,
}

impl ScopeSpan {
    /// The block text, name included
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locate `scope_name` and the brace-balanced block that follows it.
///
/// The name is matched as a raw substring: an occurrence inside a string
/// literal, a comment or a longer identifier (`dependenciesOf`) is found just
/// the same. Returns `None` when the name is missing or when no balanced
/// block follows before the end of the text.
pub fn extract_scope(text: &str, scope_name: &str) -> Option<ScopeSpan> {
    if scope_name.is_empty() {
        return None;
    }

    let start = text.find(scope_name)?;
    let mut depth: usize = 0;
    let mut opened = false;

    // Braces are ASCII, so scanning bytes never lands inside a UTF-8 sequence
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => {
                depth += 1;
                opened = true;
            }
            b'}' if opened => depth -= 1,
            _ => {}
        }

        if opened && depth == 0 {
            let end = start + offset + 1;
            trace!("Scope '{}' spans bytes {}..{}", scope_name, start, end);
            return Some(ScopeSpan {
                scope_name: scope_name.to_string(),
                start,
                end,
            });
        }
    }

    trace!("Scope '{}' is never closed", scope_name);
    None
}

/// The `repositories` and `dependencies` blocks of an include script, in the
/// order they must appear in a generated build script.
///
/// Without a `dependencies` block nothing is returned, even when a
/// `repositories` block exists.
pub fn compile_dependency_scopes(text: &str) -> Vec<&str> {
    let Some(dependencies) = extract_scope(text, DEPENDENCIES_SCOPE) else {
        return Vec::new();
    };

    let mut scopes = Vec::with_capacity(2);
    if let Some(repositories) = extract_scope(text, REPOSITORIES_SCOPE) {
        scopes.push(repositories.text(text));
    }
    scopes.push(dependencies.text(text));
    scopes
}

/// `text` without the first `scope_name` block, or `None` when there is no
/// such block
pub fn remove_scope(text: &str, scope_name: &str) -> Option<String> {
    let span = extract_scope(text, scope_name)?;
    let mut result = String::with_capacity(text.len() - span.len());
    result.push_str(&text[..span.start]);
    result.push_str(&text[span.end..]);
    Some(result)
}

//! AndroidManifest.xml tree model, reader and writer

mod manifest;
mod node;
mod writer;

pub use manifest::ManifestParser;
pub use node::{
    Children, ManifestNode, ANDROID_NAMESPACE_URI, MANIFEST_TAG, PACKAGE_ATTRIBUTE,
};
pub use writer::to_xml_string;

use miette::Diagnostic;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while reading or writing manifest markup
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to parse manifest at byte {position}: {message}")]
    #[diagnostic(
        code(aarprep::manifest::parse),
        help("the existing AndroidManifest.xml must be well-formed XML")
    )]
    Parse { position: usize, message: String },

    #[error("failed to serialize manifest: {0}")]
    #[diagnostic(code(aarprep::manifest::serialize))]
    Serialize(String),
}

/// Top-level elements of a parsed XML text.
///
/// A well-formed manifest has exactly one entry, `manifest`. Anything else is
/// a fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    pub elements: BTreeMap<String, Children>,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether a top-level `<manifest>` element is present
    pub fn has_manifest(&self) -> bool {
        self.elements.contains_key(MANIFEST_TAG)
    }

    /// Split the document into its single `<manifest>` root, or hand back the
    /// fragment elements when there is none.
    pub fn into_root(mut self) -> Result<ManifestNode, BTreeMap<String, Children>> {
        match self.elements.remove(MANIFEST_TAG) {
            Some(Children::One(node)) if self.elements.is_empty() => Ok(node),
            Some(group) => {
                self.elements.insert(MANIFEST_TAG.to_string(), group);
                Err(self.elements)
            }
            None => Err(self.elements),
        }
    }
}

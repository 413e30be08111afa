//! Manifest merging for staged library modules.
//!
//! Every staged module needs an AndroidManifest.xml whose `<manifest>` root
//! declares a package. The merger keeps whatever the plugin already ships and
//! guarantees the package is present.

use crate::parser::xml::{
    to_xml_string, ManifestError, ManifestNode, ManifestParser, XmlDocument, MANIFEST_TAG,
    PACKAGE_ATTRIBUTE,
};
use serde::Serialize;
use tracing::debug;

/// Where the effective package of a merged manifest came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSource {
    /// The plugin's own `<manifest package="...">`
    Existing,
    /// The identifier supplied by the caller
    Default,
}

impl PackageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageSource::Existing => "existing",
            PackageSource::Default => "default",
        }
    }
}

/// A merged manifest tree and the provenance of its package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedManifest {
    pub root: ManifestNode,
    pub package_source: PackageSource,
}

impl MergedManifest {
    pub fn package(&self) -> &str {
        self.root.attribute(PACKAGE_ATTRIBUTE).unwrap_or_default()
    }

    pub fn to_xml(&self) -> Result<String, ManifestError> {
        to_xml_string(&self.root)
    }
}

/// Merges an optional existing manifest with a default package identifier
pub struct ManifestMerger {
    parser: ManifestParser,
}

impl ManifestMerger {
    pub fn new() -> Self {
        Self {
            parser: ManifestParser::new(),
        }
    }

    /// Merge manifest text and serialize the result.
    ///
    /// A package already declared on the existing `<manifest>` root wins over
    /// `default_package`. Parse failures are returned as-is.
    pub fn merge(
        &self,
        existing: Option<&str>,
        default_package: &str,
    ) -> Result<String, ManifestError> {
        self.merge_content(existing, default_package)?.to_xml()
    }

    /// Same as [`ManifestMerger::merge`], stopping short of serialization
    pub fn merge_content(
        &self,
        existing: Option<&str>,
        default_package: &str,
    ) -> Result<MergedManifest, ManifestError> {
        let document = existing
            .map(|contents| self.parser.parse(contents))
            .transpose()?;
        Ok(self.merge_document(document, default_package))
    }

    /// Merge an already parsed document
    pub fn merge_document(
        &self,
        existing: Option<XmlDocument>,
        default_package: &str,
    ) -> MergedManifest {
        let Some(document) = existing else {
            debug!("No existing manifest, using package {}", default_package);
            return MergedManifest {
                root: ManifestNode::empty_manifest(default_package),
                package_source: PackageSource::Default,
            };
        };

        let (mut root, package, package_source) = match document.into_root() {
            Ok(manifest) => {
                let (package, source) = match manifest.package() {
                    Some(package) => (package.to_string(), PackageSource::Existing),
                    None => (default_package.to_string(), PackageSource::Default),
                };
                let root = ManifestNode::new(MANIFEST_TAG)
                    .with_attributes(manifest.attributes)
                    .with_children(manifest.children)
                    .with_text(manifest.text);
                (root, package, source)
            }
            Err(fragment) => {
                debug!(
                    "Manifest fragment with {} top-level element name(s), wrapping in <{}>",
                    fragment.len(),
                    MANIFEST_TAG
                );
                let root = ManifestNode::new(MANIFEST_TAG).with_children(fragment);
                (root, default_package.to_string(), PackageSource::Default)
            }
        };

        root.set_attribute(PACKAGE_ATTRIBUTE, package);

        debug!(
            "Merged manifest package: {} ({})",
            root.attribute(PACKAGE_ATTRIBUTE).unwrap_or_default(),
            package_source.as_str()
        );

        MergedManifest {
            root,
            package_source,
        }
    }
}

impl Default for ManifestMerger {
    fn default() -> Self {
        Self::new()
    }
}

pub mod gradle;
pub mod xml;

pub use gradle::{compile_dependency_scopes, extract_scope, ScopeSpan};
pub use xml::{ManifestError, ManifestNode, ManifestParser, XmlDocument};

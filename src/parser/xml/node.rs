use std::collections::BTreeMap;

/// Android resource schema bound to the `android:` prefix
pub const ANDROID_NAMESPACE_URI: &str = "http://schemas.android.com/apk/res/android";

/// Tag of the manifest root element
pub const MANIFEST_TAG: &str = "manifest";

/// Attribute holding the package identifier on the manifest root
pub const PACKAGE_ATTRIBUTE: &str = "package";

/// Children sharing one element name.
///
/// A name seen once stays `One`; a repeated name collapses into `Many`,
/// keeping document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    One(ManifestNode),
    Many(Vec<ManifestNode>),
}

impl Children {
    /// Add another node with the same name
    pub fn push(&mut self, node: ManifestNode) {
        match self {
            Children::Many(nodes) => nodes.push(node),
            Children::One(_) => {
                if let Children::One(first) = std::mem::replace(self, Children::Many(Vec::new())) {
                    *self = Children::Many(vec![first, node]);
                }
            }
        }
    }

    /// First node under this name
    pub fn first(&self) -> Option<&ManifestNode> {
        match self {
            Children::One(node) => Some(node),
            Children::Many(nodes) => nodes.first(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Children::One(_) => 1,
            Children::Many(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestNode> {
        match self {
            Children::One(node) => std::slice::from_ref(node).iter(),
            Children::Many(nodes) => nodes.iter(),
        }
    }
}

/// Insert `node` under its own name, collapsing repeats into `Children::Many`
pub(crate) fn insert_child(map: &mut BTreeMap<String, Children>, node: ManifestNode) {
    match map.get_mut(&node.name) {
        Some(existing) => existing.push(node),
        None => {
            map.insert(node.name.clone(), Children::One(node));
        }
    }
}

/// One element of a manifest tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestNode {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: BTreeMap<String, Children>,
    /// Trimmed character data of the element
    pub text: Option<String>,
}

impl ManifestNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            children: BTreeMap::new(),
            text: None,
        }
    }

    /// The canned `<manifest>` used when a plugin ships no manifest of its own
    pub fn empty_manifest(package: &str) -> Self {
        Self::new(MANIFEST_TAG)
            .with_attribute("xmlns:android", ANDROID_NAMESPACE_URI)
            .with_attribute(PACKAGE_ATTRIBUTE, package)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_child(mut self, child: ManifestNode) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children(mut self, children: BTreeMap<String, Children>) -> Self {
        for (name, group) in children {
            match self.children.get_mut(&name) {
                Some(existing) => {
                    let nodes = match group {
                        Children::One(node) => vec![node],
                        Children::Many(nodes) => nodes,
                    };
                    for node in nodes {
                        existing.push(node);
                    }
                }
                None => {
                    self.children.insert(name, group);
                }
            }
        }
        self
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an attribute, overwriting any previous value
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn add_child(&mut self, child: ManifestNode) {
        insert_child(&mut self.children, child);
    }

    /// All children with the given tag, in document order
    pub fn children_named(&self, name: &str) -> impl Iterator<Item = &ManifestNode> {
        self.children.get(name).into_iter().flat_map(Children::iter)
    }

    /// The `package` attribute, when the node carries a non-empty one
    pub fn package(&self) -> Option<&str> {
        self.attribute(PACKAGE_ATTRIBUTE).filter(|p| !p.is_empty())
    }
}

//! SGF nodes: ordered property identifier → values maps.

use crate::Span;

/// One property of a node: an identifier and its raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Identifier as written (`B`, `AB`, `SZ`, ...).
    pub ident: String,
    /// Values with brackets stripped and `\]` unescaped, in source order.
    pub values: Vec<String>,
    /// Span from the identifier to the end of its last value.
    pub span: Span,
}

impl Property {
    /// First value, which is all most properties look at.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// A node of a game tree.
///
/// Properties keep their insertion order. An identifier occurs at most once,
/// and once assembly finishes every property has at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    properties: Vec<Property>,
    /// Span from the `;` to the end of the last property.
    pub span: Span,
}

impl Node {
    pub(crate) fn new(span: Span) -> Self {
        Self {
            properties: Vec::new(),
            span,
        }
    }

    /// Look up a property by identifier.
    pub fn get(&self, ident: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.ident == ident)
    }

    /// First value of a property.
    pub fn value(&self, ident: &str) -> Option<&str> {
        self.get(ident).and_then(Property::first)
    }

    pub fn contains(&self, ident: &str) -> bool {
        self.get(ident).is_some()
    }

    /// Properties in source order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Start a new property. The caller has already rejected duplicates.
    pub(crate) fn open_property(&mut self, ident: &str, span: Span) {
        self.properties.push(Property {
            ident: ident.to_string(),
            values: Vec::new(),
            span,
        });
        self.span = self.span.cover(span);
    }

    /// The property values are currently appended to.
    pub(crate) fn pending(&self) -> Option<&Property> {
        self.properties.last()
    }

    pub(crate) fn push_value(&mut self, value: String, span: Span) -> bool {
        let Some(property) = self.properties.last_mut() else {
            return false;
        };
        property.values.push(value);
        property.span = property.span.cover(span);
        self.span = self.span.cover(span);
        true
    }
}

//! Links and link relations.
//!
//! A [`Link`] pairs a target href with the [`LinkRelation`] it plays in a
//! representation. [`Links`] is the ordered sequence every representation
//! model carries.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HateoasError, HateoasResult};

/// A named role a link or a group of embedded resources plays.
///
/// Equality and hashing are by name, so relations can be used as grouping
/// keys regardless of whether they came from a constant or were parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkRelation(Cow<'static, str>);

impl LinkRelation {
    /// Creates a relation from a trusted name without validation.
    pub fn of(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Parses a relation name, rejecting empty names and names containing
    /// whitespace.
    pub fn parse(name: &str) -> HateoasResult<Self> {
        if name.is_empty() {
            return Err(HateoasError::InvalidRelation {
                relation: name.to_string(),
                reason: "must not be empty",
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(HateoasError::InvalidRelation {
                relation: name.to_string(),
                reason: "must not contain whitespace",
            });
        }
        Ok(Self(Cow::Owned(name.to_string())))
    }

    /// Returns the relation name.
    pub fn value(&self) -> &str {
        &self.0
    }

    const fn iana(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for LinkRelation {
    fn from(name: &'static str) -> Self {
        Self::of(name)
    }
}

/// Commonly used relations from the IANA link relation registry.
#[derive(Debug, Clone, Copy)]
pub struct IanaLinkRelations;

impl IanaLinkRelations {
    /// `self`: the context resource itself.
    pub const SELF: LinkRelation = LinkRelation::iana("self");
    /// `next`: the next page in a series.
    pub const NEXT: LinkRelation = LinkRelation::iana("next");
    /// `prev`: the previous page in a series.
    pub const PREV: LinkRelation = LinkRelation::iana("prev");
    /// `first`: the first page in a series.
    pub const FIRST: LinkRelation = LinkRelation::iana("first");
    /// `last`: the last page in a series.
    pub const LAST: LinkRelation = LinkRelation::iana("last");
    /// `item`: a member of the context collection.
    pub const ITEM: LinkRelation = LinkRelation::iana("item");
    /// `collection`: the collection the context is a member of.
    pub const COLLECTION: LinkRelation = LinkRelation::iana("collection");
    /// `related`: a related resource.
    pub const RELATED: LinkRelation = LinkRelation::iana("related");
    /// `alternate`: an alternate representation.
    pub const ALTERNATE: LinkRelation = LinkRelation::iana("alternate");
    /// `describedby`: a resource describing the context.
    pub const DESCRIBED_BY: LinkRelation = LinkRelation::iana("describedby");
    /// `edit`: an editable version of the context.
    pub const EDIT: LinkRelation = LinkRelation::iana("edit");
    /// `search`: a search facility for the context.
    pub const SEARCH: LinkRelation = LinkRelation::iana("search");
    /// `up`: the parent of the context.
    pub const UP: LinkRelation = LinkRelation::iana("up");

    const ALL: [LinkRelation; 13] = [
        Self::SELF,
        Self::NEXT,
        Self::PREV,
        Self::FIRST,
        Self::LAST,
        Self::ITEM,
        Self::COLLECTION,
        Self::RELATED,
        Self::ALTERNATE,
        Self::DESCRIBED_BY,
        Self::EDIT,
        Self::SEARCH,
        Self::UP,
    ];

    /// Returns whether the given name is one of the registered relations
    /// above (case-insensitive).
    pub fn is_iana_rel(name: &str) -> bool {
        Self::ALL
            .iter()
            .any(|rel| rel.value().eq_ignore_ascii_case(name))
    }
}

/// A hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    rel: LinkRelation,
    href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hreflang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deprecation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<String>,
}

impl Link {
    /// Creates a link with the given href and relation.
    pub fn new(href: impl Into<String>, rel: impl Into<LinkRelation>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            title: None,
            media_type: None,
            name: None,
            hreflang: None,
            deprecation: None,
            profile: None,
        }
    }

    /// Creates a `self` link.
    pub fn of(href: impl Into<String>) -> Self {
        Self::new(href, IanaLinkRelations::SELF)
    }

    /// Creates a link from untrusted input, validating both parts.
    pub fn parse(href: &str, rel: &str) -> HateoasResult<Self> {
        let rel = LinkRelation::parse(rel)?;
        if href.trim().is_empty() {
            return Err(HateoasError::InvalidHref {
                rel: rel.value().to_string(),
            });
        }
        Ok(Self::new(href, rel))
    }

    /// Returns a copy of this link with a different relation.
    pub fn with_rel(mut self, rel: impl Into<LinkRelation>) -> Self {
        self.rel = rel.into();
        self
    }

    /// Sets the human-readable title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the media type hint.
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the secondary key used to tell links of the same relation apart.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the language of the target resource.
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Marks the link as deprecated, pointing at a URL explaining why.
    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    /// Sets the profile of the target resource.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Returns the relation.
    pub fn rel(&self) -> &LinkRelation {
        &self.rel
    }

    /// Returns the target href.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the media type hint, if any.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns the name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the hreflang, if any.
    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    /// Returns the deprecation URL, if any.
    pub fn deprecation(&self) -> Option<&str> {
        self.deprecation.as_deref()
    }

    /// Returns the profile, if any.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Returns whether the link carries the given relation.
    pub fn has_rel(&self, rel: &LinkRelation) -> bool {
        &self.rel == rel
    }

    /// Returns whether the href is a URI template (contains a `{...}`
    /// expression).
    pub fn is_templated(&self) -> bool {
        match self.href.find('{') {
            Some(open) => self.href[open..].contains('}'),
            None => false,
        }
    }
}

/// An ordered sequence of links. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(Vec<Link>);

impl Links {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link.
    pub fn add(&mut self, link: Link) {
        self.0.push(link);
    }

    /// Returns the first link with the given relation.
    pub fn get_link(&self, rel: &LinkRelation) -> Option<&Link> {
        self.0.iter().find(|link| link.has_rel(rel))
    }

    /// Returns all links with the given relation, in insertion order.
    pub fn get_links<'a>(&'a self, rel: &'a LinkRelation) -> impl Iterator<Item = &'a Link> + 'a {
        self.0.iter().filter(move |link| link.has_rel(rel))
    }

    /// Returns whether a link with the given relation exists.
    pub fn has_link(&self, rel: &LinkRelation) -> bool {
        self.get_link(rel).is_some()
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no links.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates links in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.0.iter()
    }

    /// Returns the links as a slice.
    pub fn as_slice(&self) -> &[Link] {
        &self.0
    }
}

impl FromIterator<Link> for Links {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Link> for Links {
    fn extend<I: IntoIterator<Item = Link>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Links {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_equality_by_name() {
        assert_eq!(LinkRelation::of("orders"), LinkRelation::of(String::from("orders")));
        assert_eq!(LinkRelation::parse("self").unwrap(), IanaLinkRelations::SELF);
    }

    #[test]
    fn test_relation_parse_rejects_empty_and_whitespace() {
        assert!(matches!(
            LinkRelation::parse(""),
            Err(HateoasError::InvalidRelation { .. })
        ));
        assert!(LinkRelation::parse("has space").is_err());
    }

    #[test]
    fn test_is_iana_rel() {
        assert!(IanaLinkRelations::is_iana_rel("next"));
        assert!(IanaLinkRelations::is_iana_rel("Self"));
        assert!(!IanaLinkRelations::is_iana_rel("orders"));
    }

    #[test]
    fn test_link_of_is_self() {
        let link = Link::of("http://localhost/orders/1");
        assert_eq!(link.rel(), &IanaLinkRelations::SELF);
        assert_eq!(link.href(), "http://localhost/orders/1");
    }

    #[test]
    fn test_link_parse_rejects_empty_href() {
        let err = Link::parse("  ", "next").unwrap_err();
        assert!(matches!(err, HateoasError::InvalidHref { rel } if rel == "next"));
    }

    #[test]
    fn test_templated_detection() {
        assert!(Link::new("/orders{?page,size}", "search").is_templated());
        assert!(!Link::new("/orders?page=1", "next").is_templated());
        assert!(!Link::new("/broken{", "next").is_templated());
    }

    #[test]
    fn test_links_lookup_keeps_order_and_duplicates() {
        let links: Links = vec![
            Link::new("/a", "item"),
            Link::of("/self"),
            Link::new("/b", "item"),
        ]
        .into_iter()
        .collect();

        let item = IanaLinkRelations::ITEM;
        assert_eq!(links.len(), 3);
        assert_eq!(links.get_link(&item).unwrap().href(), "/a");
        let hrefs: Vec<_> = links.get_links(&item).map(Link::href).collect();
        assert_eq!(hrefs, vec!["/a", "/b"]);
        assert!(!links.has_link(&IanaLinkRelations::NEXT));
    }

    #[test]
    fn test_link_serde_omits_unset_attributes() {
        let link = Link::new("/orders", "collection").with_title("Orders");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rel": "collection", "href": "/orders", "title": "Orders"})
        );
    }
}

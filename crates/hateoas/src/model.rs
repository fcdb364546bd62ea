//! Representation models.
//!
//! [`RepresentationModel`] is the capability every builder relies on: owning
//! an ordered [`Links`] sequence that can be appended to in place.
//! [`EntityModel`] wraps a plain domain object and [`CollectionModel`] pairs
//! ordered content with collection-level links.

use crate::link::{Link, LinkRelation, Links};

/// A value that carries hypermedia links.
pub trait RepresentationModel {
    /// Returns the links attached to this model.
    fn links(&self) -> &Links;

    /// Returns the links for in-place mutation.
    fn links_mut(&mut self) -> &mut Links;

    /// Appends a link after any existing links.
    fn add_link(&mut self, link: Link) {
        self.links_mut().add(link);
    }

    /// Appends several links in order.
    fn add_links<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = Link>,
        Self: Sized,
    {
        self.links_mut().extend(links);
    }

    /// Returns the first link with the given relation.
    fn get_link(&self, rel: &LinkRelation) -> Option<&Link> {
        self.links().get_link(rel)
    }

    /// Returns whether a link with the given relation exists.
    fn has_link(&self, rel: &LinkRelation) -> bool {
        self.links().has_link(rel)
    }
}

/// A domain object augmented with links.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityModel<T> {
    content: T,
    links: Links,
}

impl<T> EntityModel<T> {
    /// Wraps content with no links.
    pub fn of(content: T) -> Self {
        Self {
            content,
            links: Links::new(),
        }
    }

    /// Wraps content with the given links.
    pub fn of_with_links<I>(content: T, links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        Self {
            content,
            links: links.into_iter().collect(),
        }
    }

    /// Returns the wrapped content.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Unwraps the content, dropping the links.
    pub fn into_content(self) -> T {
        self.content
    }
}

impl<T> RepresentationModel for EntityModel<T> {
    fn links(&self) -> &Links {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

/// An ordered collection of items plus collection-level links.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionModel<E> {
    content: Vec<E>,
    links: Links,
}

impl<E> CollectionModel<E> {
    /// Creates a collection from content and links, keeping both orders.
    pub fn of<C, L>(content: C, links: L) -> Self
    where
        C: IntoIterator<Item = E>,
        L: IntoIterator<Item = Link>,
    {
        Self {
            content: content.into_iter().collect(),
            links: links.into_iter().collect(),
        }
    }

    /// Creates an empty collection with no links.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            links: Links::new(),
        }
    }

    /// Returns the content in order.
    pub fn content(&self) -> &[E] {
        &self.content
    }

    /// Unwraps the content, dropping the links.
    pub fn into_content(self) -> Vec<E> {
        self.content
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns whether the collection has no items.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterates the content in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.content.iter()
    }
}

impl<E> Default for CollectionModel<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> RepresentationModel for CollectionModel<E> {
    fn links(&self) -> &Links {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

impl<'a, E> IntoIterator for &'a CollectionModel<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

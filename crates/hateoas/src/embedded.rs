//! Relation-tagged wrappers for embedded resources.
//!
//! An [`EmbeddedWrapper`] ties a value to the [`LinkRelation`] it is embedded
//! under. [`EmbeddedWrappers`] decides whether a single model is surfaced as a
//! plain element or as a one-item collection.

use crate::link::LinkRelation;

/// The payload of an embedded wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedValue<M> {
    /// A single model.
    Element(M),
    /// Several models rendered as an array.
    Collection(Vec<M>),
    /// A placeholder that surfaces a relation with no content.
    Empty,
}

/// A model value tagged with the relation it is embedded under.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedWrapper<M> {
    rel: LinkRelation,
    value: EmbeddedValue<M>,
}

impl<M> EmbeddedWrapper<M> {
    /// Returns the relation this value is embedded under.
    pub fn rel(&self) -> &LinkRelation {
        &self.rel
    }

    /// Returns the payload.
    pub fn value(&self) -> &EmbeddedValue<M> {
        &self.value
    }

    /// Unwraps the payload.
    pub fn into_value(self) -> EmbeddedValue<M> {
        self.value
    }

    /// Returns whether the payload must be rendered as an array.
    pub fn is_collection_value(&self) -> bool {
        !matches!(self.value, EmbeddedValue::Element(_))
    }

    /// Returns whether this is an empty placeholder.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            EmbeddedValue::Empty => true,
            EmbeddedValue::Collection(models) => models.is_empty(),
            EmbeddedValue::Element(_) => false,
        }
    }

    /// Iterates the wrapped models.
    pub fn models(&self) -> std::slice::Iter<'_, M> {
        match &self.value {
            EmbeddedValue::Element(model) => std::slice::from_ref(model).iter(),
            EmbeddedValue::Collection(models) => models.iter(),
            EmbeddedValue::Empty => std::slice::Iter::default(),
        }
    }
}

/// Factory for [`EmbeddedWrapper`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddedWrappers {
    prefer_collections: bool,
}

impl EmbeddedWrappers {
    /// Creates a factory. With `prefer_collections`, single models are
    /// wrapped as one-item collections.
    pub fn new(prefer_collections: bool) -> Self {
        Self { prefer_collections }
    }

    /// Returns whether single models are wrapped as collections.
    pub fn prefers_collections(&self) -> bool {
        self.prefer_collections
    }

    /// Wraps one model under the given relation.
    pub fn wrap<M>(&self, model: M, rel: LinkRelation) -> EmbeddedWrapper<M> {
        let value = if self.prefer_collections {
            EmbeddedValue::Collection(vec![model])
        } else {
            EmbeddedValue::Element(model)
        };
        EmbeddedWrapper { rel, value }
    }

    /// Wraps several models as a collection under the given relation.
    pub fn wrap_all<M, I>(&self, models: I, rel: LinkRelation) -> EmbeddedWrapper<M>
    where
        I: IntoIterator<Item = M>,
    {
        EmbeddedWrapper {
            rel,
            value: EmbeddedValue::Collection(models.into_iter().collect()),
        }
    }

    /// Creates a placeholder for a relation with no content.
    pub fn empty_collection_of<M>(&self, rel: LinkRelation) -> EmbeddedWrapper<M> {
        EmbeddedWrapper {
            rel,
            value: EmbeddedValue::Empty,
        }
    }
}

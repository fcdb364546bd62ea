//! Fluent builders for hypermedia representations.
//!
//! Start with one of the entry points and chain calls until `build`:
//!
//! - [`entity`] wraps a plain domain object into an [`EntityModel`].
//! - [`model`] starts from an existing [`RepresentationModel`].
//! - [`sub_model`] starts a collection of relation-tagged embedded models.
//!
//! A single-item builder turns into a [`MultipleItemModelBuilder`] as soon as
//! a second model is added. Every chained call consumes the builder and
//! returns it, and `build` consumes it for good.
//!
//! # Example
//!
//! ```rust
//! use helios_hateoas::builder;
//! use helios_hateoas::{EntityModel, Link, LinkRelation};
//!
//! let orders = builder::sub_model(LinkRelation::of("orders"), EntityModel::of("o1"))
//!     .sub_model(LinkRelation::of("customers"), EntityModel::of("c1"))
//!     .sub_model(LinkRelation::of("orders"), EntityModel::of("o2"))
//!     .link(Link::of("/dashboard"))
//!     .build();
//!
//! let rels: Vec<_> = orders.iter().map(|w| w.rel().value()).collect();
//! assert_eq!(rels, vec!["orders", "orders", "customers"]);
//! ```

use tracing::debug;

use crate::embedded::{EmbeddedWrapper, EmbeddedWrappers};
use crate::grouping::RelationGroups;
use crate::link::{Link, LinkRelation};
use crate::model::{CollectionModel, EntityModel, RepresentationModel};

/// Wraps a domain object as an [`EntityModel`] and starts a single-item
/// builder.
pub fn entity<T>(content: T) -> SingleItemModelBuilder<EntityModel<T>> {
    SingleItemModelBuilder::new(EntityModel::of(content))
}

/// Starts a single-item builder with an existing representation model.
pub fn model<M>(model: M) -> SingleItemModelBuilder<M>
where
    M: RepresentationModel,
{
    SingleItemModelBuilder::new(model)
}

/// Starts an embedded builder with one model tied to a relation.
pub fn sub_model<M>(relation: LinkRelation, model: M) -> EmbeddedModelBuilder<M> {
    EmbeddedModelBuilder::with_sub_model(relation, model)
}

/// Builder for a single representation model.
#[derive(Debug, Clone)]
pub struct SingleItemModelBuilder<M> {
    model: M,
}

impl<M> SingleItemModelBuilder<M>
where
    M: RepresentationModel,
{
    /// Starts the builder with one model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Appends a link to the held model.
    pub fn link(mut self, link: Link) -> Self {
        self.model.add_link(link);
        self
    }

    /// Adds a second model, switching to a multi-item builder seeded with
    /// `[held, model]` and no collection links.
    ///
    /// Links added so far stay on the first model.
    pub fn model(self, model: M) -> MultipleItemModelBuilder<M> {
        debug!("Promoting single-item builder to multi-item builder");
        MultipleItemModelBuilder::new([self.model, model], Vec::new())
    }

    /// Returns the held model with its links.
    pub fn build(self) -> M {
        self.model
    }
}

/// Builder for an ordered collection of models with collection-level links.
#[derive(Debug, Clone)]
pub struct MultipleItemModelBuilder<M> {
    models: Vec<M>,
    links: Vec<Link>,
}

impl<M> MultipleItemModelBuilder<M> {
    /// Starts the builder with the given models and links.
    ///
    /// Both sequences are moved into the builder, so the caller keeps no
    /// handle that could observe or change them.
    pub fn new<C, L>(models: C, links: L) -> Self
    where
        C: IntoIterator<Item = M>,
        L: IntoIterator<Item = Link>,
    {
        Self {
            models: models.into_iter().collect(),
            links: links.into_iter().collect(),
        }
    }

    /// Appends a model.
    pub fn model(mut self, model: M) -> Self {
        self.models.push(model);
        self
    }

    /// Appends a collection-level link.
    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Returns the models added so far.
    pub fn models(&self) -> &[M] {
        &self.models
    }

    /// Builds the collection, keeping insertion order of models and links.
    pub fn build(self) -> CollectionModel<M> {
        debug!(
            models = self.models.len(),
            links = self.links.len(),
            "Building collection model"
        );
        CollectionModel::of(self.models, self.links)
    }
}

/// Builder for models embedded under link relations.
///
/// Models are grouped by relation. `build` emits the groups in the order each
/// relation was first added, and each group's models in the order they were
/// added.
#[derive(Debug, Clone)]
pub struct EmbeddedModelBuilder<M> {
    wrappers: EmbeddedWrappers,
    entity_models: RelationGroups<M>,
    links: Vec<Link>,
}

impl<M> EmbeddedModelBuilder<M> {
    /// Starts an empty builder.
    pub fn new() -> Self {
        Self {
            wrappers: EmbeddedWrappers::new(false),
            entity_models: RelationGroups::new(),
            links: Vec::new(),
        }
    }

    /// Starts a builder with one model tied to a relation.
    pub fn with_sub_model(relation: LinkRelation, model: M) -> Self {
        Self::new().sub_model(relation, model)
    }

    /// Replaces the wrapper factory used by `build`.
    pub fn wrappers(mut self, wrappers: EmbeddedWrappers) -> Self {
        self.wrappers = wrappers;
        self
    }

    /// Adds a model under a relation. Relations may repeat; each call
    /// appends to that relation's group.
    pub fn sub_model(mut self, relation: LinkRelation, model: M) -> Self {
        self.entity_models.insert(relation, model);
        self
    }

    /// Appends a collection-level link.
    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Returns the grouped models added so far.
    pub fn groups(&self) -> &RelationGroups<M> {
        &self.entity_models
    }

    /// Flattens the groups into wrapped entries and pairs them with the
    /// collection links.
    pub fn build(self) -> CollectionModel<EmbeddedWrapper<M>> {
        debug!(
            relations = self.entity_models.relation_count(),
            models = self.entity_models.model_count(),
            links = self.links.len(),
            "Building embedded collection model"
        );

        let wrappers = self.wrappers;
        let entries = self
            .entity_models
            .into_flattened()
            .map(|(model, rel)| wrappers.wrap(model, rel));

        CollectionModel::of(entries, self.links)
    }
}

impl<M> Default for EmbeddedModelBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

//! # helios-hateoas - Hypermedia Representation Builders
//!
//! This crate provides fluent builders for assembling hypermedia API
//! responses: single entities, collections of entities, and sub-resources
//! embedded under link relations. The finished models render to
//! [HAL](https://datatracker.ietf.org/doc/html/draft-kelly-json-hal) JSON.
//!
//! ## Features
//!
//! - **Single items**: wrap one model and attach links to it
//! - **Collections**: ordered models plus collection-level links
//! - **Embedded resources**: models grouped by link relation, emitted in the
//!   order each relation was first added
//! - **HAL rendering**: `_links` and `_embedded` sections with configurable
//!   single-link and single-element shapes
//!
//! ## Quick Start
//!
//! ```rust
//! use helios_hateoas::builder;
//! use helios_hateoas::hal::ToHal;
//! use helios_hateoas::{EntityModel, HalConfiguration, IanaLinkRelations, Link, LinkRelation};
//! use serde_json::json;
//!
//! let dashboard = builder::sub_model(LinkRelation::of("orders"), EntityModel::of(json!({"id": 1})))
//!     .sub_model(LinkRelation::of("orders"), EntityModel::of(json!({"id": 2})))
//!     .link(Link::of("/dashboard"))
//!     .link(Link::new("/dashboard?page=2", IanaLinkRelations::NEXT))
//!     .build();
//!
//! let hal = dashboard.to_hal(&HalConfiguration::default()).unwrap();
//! assert_eq!(hal["_embedded"]["orders"][1]["id"], 2);
//! assert_eq!(hal["_links"]["next"]["href"], "/dashboard?page=2");
//! ```
//!
//! ## Architecture
//!
//! - [`link`] - Links, link relations and ordered link sequences
//! - [`model`] - The representation model capability, entities and collections
//! - [`embedded`] - Relation-tagged wrappers for embedded resources
//! - [`grouping`] - Insertion-ordered grouping of models by relation
//! - [`builder`] - The fluent builders and their entry points
//! - [`hal`] - HAL JSON rendering
//! - [`config`] - Rendering configuration
//! - [`error`] - Error types

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod config;
pub mod embedded;
pub mod error;
pub mod grouping;
pub mod hal;
pub mod link;
pub mod model;

// Re-export commonly used types
pub use builder::{EmbeddedModelBuilder, MultipleItemModelBuilder, SingleItemModelBuilder};
pub use config::HalConfiguration;
pub use embedded::{EmbeddedValue, EmbeddedWrapper, EmbeddedWrappers};
pub use error::{HateoasError, HateoasResult};
pub use grouping::RelationGroups;
pub use link::{IanaLinkRelations, Link, LinkRelation, Links};
pub use model::{CollectionModel, EntityModel, RepresentationModel};

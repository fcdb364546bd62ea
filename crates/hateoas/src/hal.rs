//! HAL JSON rendering.
//!
//! Renders representation models as `application/hal+json` documents:
//!
//! - Links go under `_links`, keyed by relation in the order each relation
//!   first appears.
//! - Embedded resources go under `_embedded`, keyed by relation in the same
//!   first-seen order.
//! - Empty `_links` and `_embedded` sections are omitted.
//!
//! # Example
//!
//! ```rust
//! use helios_hateoas::hal::ToHal;
//! use helios_hateoas::{EntityModel, HalConfiguration, Link, RepresentationModel};
//!
//! let mut order = EntityModel::of(serde_json::json!({"id": 1}));
//! order.add_link(Link::of("/orders/1"));
//!
//! let hal = order.to_hal(&HalConfiguration::default()).unwrap();
//! assert_eq!(hal["id"], 1);
//! assert_eq!(hal["_links"]["self"]["href"], "/orders/1");
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::config::HalConfiguration;
use crate::embedded::{EmbeddedValue, EmbeddedWrapper};
use crate::error::{HateoasError, HateoasResult};
use crate::link::{Link, Links};
use crate::model::{CollectionModel, EntityModel, RepresentationModel};

/// Media type of HAL JSON documents.
pub const HAL_JSON: &str = "application/hal+json";

/// Property holding links.
pub const LINKS_PROPERTY: &str = "_links";

/// Property holding embedded resources.
pub const EMBEDDED_PROPERTY: &str = "_embedded";

/// Renders a value as a HAL JSON document.
pub trait ToHal {
    /// Renders this value.
    fn to_hal(&self, config: &HalConfiguration) -> HateoasResult<Value>;
}

/// Places an item of a collection into an `_embedded` section.
pub trait HalEmbeddable {
    /// Adds this item to the section.
    fn embed_into(
        &self,
        section: &mut EmbeddedSection,
        config: &HalConfiguration,
    ) -> HateoasResult<()>;
}

/// Renders a single link, without its relation.
pub fn link_to_json(link: &Link) -> Value {
    let mut json = Map::new();
    json.insert("href".to_string(), Value::from(link.href()));

    if link.is_templated() {
        json.insert("templated".to_string(), Value::Bool(true));
    }

    let optional = [
        ("type", link.media_type()),
        ("title", link.title()),
        ("name", link.name()),
        ("hreflang", link.hreflang()),
        ("deprecation", link.deprecation()),
        ("profile", link.profile()),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            json.insert(key.to_string(), Value::from(value));
        }
    }

    Value::Object(json)
}

/// Renders links as the body of a `_links` section.
pub fn links_to_hal(links: &Links, config: &HalConfiguration) -> Map<String, Value> {
    let mut grouped: Vec<(&str, Vec<Value>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for link in links {
        let rel = link.rel().value();
        match index.get(rel) {
            Some(&position) => grouped[position].1.push(link_to_json(link)),
            None => {
                index.insert(rel, grouped.len());
                grouped.push((rel, vec![link_to_json(link)]));
            }
        }
    }

    grouped
        .into_iter()
        .map(|(rel, mut values)| {
            let value = if values.len() == 1 && !config.render_single_links_as_array {
                values.remove(0)
            } else {
                Value::Array(values)
            };
            (rel.to_string(), value)
        })
        .collect()
}

/// An `_embedded` section being assembled.
///
/// A relation that receives exactly one element renders as an object; a
/// relation that receives a collection, or more than one entry, renders as
/// an array.
#[derive(Debug, Default)]
pub struct EmbeddedSection {
    slots: Vec<(String, Slot)>,
    index: HashMap<String, usize>,
}

#[derive(Debug)]
enum Slot {
    Single(Value),
    Many(Vec<Value>),
}

impl EmbeddedSection {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single element under a relation.
    pub fn push_element(&mut self, rel: &str, value: Value) {
        match self.slot_mut(rel) {
            Some(slot) => slot.push(value),
            None => self.insert_slot(rel, Slot::Single(value)),
        }
    }

    /// Adds values under a relation that must render as an array, even when
    /// `values` is empty.
    pub fn push_collection(&mut self, rel: &str, values: Vec<Value>) {
        match self.slot_mut(rel) {
            Some(slot) => {
                for value in values {
                    slot.push(value);
                }
                slot.force_array();
            }
            None => self.insert_slot(rel, Slot::Many(values)),
        }
    }

    /// Returns whether nothing was added.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Converts the section into the body of an `_embedded` property.
    pub fn into_json(self) -> Map<String, Value> {
        self.slots
            .into_iter()
            .map(|(rel, slot)| {
                let value = match slot {
                    Slot::Single(value) => value,
                    Slot::Many(values) => Value::Array(values),
                };
                (rel, value)
            })
            .collect()
    }

    fn slot_mut(&mut self, rel: &str) -> Option<&mut Slot> {
        let position = *self.index.get(rel)?;
        Some(&mut self.slots[position].1)
    }

    fn insert_slot(&mut self, rel: &str, slot: Slot) {
        self.index.insert(rel.to_string(), self.slots.len());
        self.slots.push((rel.to_string(), slot));
    }
}

impl Slot {
    fn push(&mut self, value: Value) {
        match self {
            Slot::Single(first) => {
                let first = std::mem::take(first);
                *self = Slot::Many(vec![first, value]);
            }
            Slot::Many(values) => values.push(value),
        }
    }

    fn force_array(&mut self) {
        if let Slot::Single(first) = self {
            let first = std::mem::take(first);
            *self = Slot::Many(vec![first]);
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn attach_sections(
    mut document: Map<String, Value>,
    embedded: EmbeddedSection,
    links: &Links,
    config: &HalConfiguration,
) -> Value {
    if !embedded.is_empty() {
        document.insert(
            EMBEDDED_PROPERTY.to_string(),
            Value::Object(embedded.into_json()),
        );
    }
    if !links.is_empty() {
        document.insert(
            LINKS_PROPERTY.to_string(),
            Value::Object(links_to_hal(links, config)),
        );
    }
    Value::Object(document)
}

impl<T> ToHal for EntityModel<T>
where
    T: Serialize,
{
    fn to_hal(&self, config: &HalConfiguration) -> HateoasResult<Value> {
        let document = match serde_json::to_value(self.content())? {
            Value::Object(document) => document,
            other => {
                return Err(HateoasError::NonObjectContent {
                    kind: json_kind(&other),
                });
            }
        };

        for reserved in [LINKS_PROPERTY, EMBEDDED_PROPERTY] {
            if document.contains_key(reserved) {
                return Err(HateoasError::ReservedProperty {
                    property: reserved.to_string(),
                });
            }
        }

        Ok(attach_sections(
            document,
            EmbeddedSection::new(),
            self.links(),
            config,
        ))
    }
}

impl<T> HalEmbeddable for EntityModel<T>
where
    T: Serialize,
{
    fn embed_into(
        &self,
        section: &mut EmbeddedSection,
        config: &HalConfiguration,
    ) -> HateoasResult<()> {
        section.push_collection(&config.collection_rel, vec![self.to_hal(config)?]);
        Ok(())
    }
}

impl<M> HalEmbeddable for EmbeddedWrapper<M>
where
    M: ToHal,
{
    fn embed_into(
        &self,
        section: &mut EmbeddedSection,
        config: &HalConfiguration,
    ) -> HateoasResult<()> {
        let rel = self.rel().value();
        match self.value() {
            EmbeddedValue::Element(model) => section.push_element(rel, model.to_hal(config)?),
            EmbeddedValue::Collection(models) => {
                let values = models
                    .iter()
                    .map(|model| model.to_hal(config))
                    .collect::<HateoasResult<Vec<_>>>()?;
                section.push_collection(rel, values);
            }
            EmbeddedValue::Empty => section.push_collection(rel, Vec::new()),
        }
        Ok(())
    }
}

impl<E> ToHal for CollectionModel<E>
where
    E: HalEmbeddable,
{
    fn to_hal(&self, config: &HalConfiguration) -> HateoasResult<Value> {
        let mut embedded = EmbeddedSection::new();
        for item in self {
            item.embed_into(&mut embedded, config)?;
        }
        trace!(
            items = self.len(),
            links = self.links().len(),
            "Rendered collection model"
        );
        Ok(attach_sections(Map::new(), embedded, self.links(), config))
    }
}

impl<E> HalEmbeddable for CollectionModel<E>
where
    E: HalEmbeddable,
{
    fn embed_into(
        &self,
        section: &mut EmbeddedSection,
        config: &HalConfiguration,
    ) -> HateoasResult<()> {
        section.push_collection(&config.collection_rel, vec![self.to_hal(config)?]);
        Ok(())
    }
}

/// Serializes a rendered document, pretty-printed when configured.
pub fn render_string(document: &Value, config: &HalConfiguration) -> HateoasResult<String> {
    let rendered = if config.pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(rendered)
}

/// Renders a model and serializes the result.
pub fn to_hal_string<R>(model: &R, config: &HalConfiguration) -> HateoasResult<String>
where
    R: ToHal + ?Sized,
{
    render_string(&model.to_hal(config)?, config)
}

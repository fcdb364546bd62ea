//! Render requests and their translation into builder calls.

use std::collections::HashMap;

use anyhow::{Context, bail};
use helios_hateoas::builder;
use helios_hateoas::hal::ToHal;
use helios_hateoas::{
    CollectionModel, EmbeddedModelBuilder, EntityModel, HalConfiguration, Link, LinkRelation,
    RepresentationModel,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// A link as written in a render request.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSpec {
    /// Relation name.
    pub rel: String,
    /// Target href.
    pub href: String,
    /// Optional title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional media type hint.
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    /// Optional name.
    #[serde(default)]
    pub name: Option<String>,
}

impl LinkSpec {
    /// Validates and converts into a [`Link`].
    pub fn to_link(&self) -> anyhow::Result<Link> {
        let mut link = Link::parse(&self.href, &self.rel)?;
        if let Some(title) = &self.title {
            link = link.with_title(title);
        }
        if let Some(media_type) = &self.media_type {
            link = link.with_type(media_type);
        }
        if let Some(name) = &self.name {
            link = link.with_name(name);
        }
        Ok(link)
    }
}

/// A top-level item in a render request.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    /// The resource body.
    pub content: Value,
    /// Links of the resource itself.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

/// An embedded entry in a render request.
///
/// An entry without `content` asks for the relation to be rendered as an
/// empty array.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedSpec {
    /// Relation the entry is embedded under.
    pub rel: String,
    /// The resource body.
    #[serde(default)]
    pub content: Option<Value>,
    /// Links of the embedded resource itself.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

/// A complete render request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderRequest {
    /// Links of the rendered document.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// Plain items. One item renders as an entity, several as a collection.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
    /// Entries embedded under link relations.
    #[serde(default)]
    pub embedded: Vec<EmbeddedSpec>,
}

fn to_links(specs: &[LinkSpec]) -> anyhow::Result<Vec<Link>> {
    specs.iter().map(LinkSpec::to_link).collect()
}

fn to_entity(content: Value, links: &[LinkSpec]) -> anyhow::Result<EntityModel<Value>> {
    Ok(EntityModel::of_with_links(content, to_links(links)?))
}

impl RenderRequest {
    /// Parses a request from JSON text.
    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        serde_json::from_str(input).context("Render request is not valid JSON")
    }

    /// Builds the requested model and renders it as a HAL document.
    pub fn render(self, config: &HalConfiguration) -> anyhow::Result<Value> {
        if !self.items.is_empty() && !self.embedded.is_empty() {
            bail!("A render request may contain either 'items' or 'embedded', not both");
        }

        let links = to_links(&self.links)?;

        if !self.embedded.is_empty() {
            return self.render_embedded(links, config);
        }

        let mut items = self.items.into_iter();
        let Some(first) = items.next() else {
            info!("Render request has no items, rendering an empty collection");
            let empty: CollectionModel<EntityModel<Value>> = CollectionModel::of(Vec::new(), links);
            return Ok(empty.to_hal(config)?);
        };

        let single = builder::model(to_entity(first.content, &first.links)?);
        match items.next() {
            None => {
                debug!("Rendering a single entity");
                let entity = links.into_iter().fold(single, |b, link| b.link(link));
                Ok(entity.build().to_hal(config)?)
            }
            Some(second) => {
                let mut multiple = single.model(to_entity(second.content, &second.links)?);
                for item in items {
                    multiple = multiple.model(to_entity(item.content, &item.links)?);
                }
                for link in links {
                    multiple = multiple.link(link);
                }
                let collection = multiple.build();
                debug!(items = collection.len(), "Rendering a collection");
                Ok(collection.to_hal(config)?)
            }
        }
    }

    fn render_embedded(self, links: Vec<Link>, config: &HalConfiguration) -> anyhow::Result<Value> {
        let wrappers = config.wrappers();
        let mut embedded = EmbeddedModelBuilder::new().wrappers(wrappers);
        let mut placeholders = Vec::new();
        let mut first_seen: HashMap<LinkRelation, usize> = HashMap::new();

        for (index, entry) in self.embedded.into_iter().enumerate() {
            let rel = LinkRelation::parse(&entry.rel)
                .with_context(|| format!("Embedded entry {} has an invalid relation", index))?;
            let position = first_seen.len();
            first_seen.entry(rel.clone()).or_insert(position);
            match entry.content {
                Some(content) => {
                    embedded = embedded.sub_model(rel, to_entity(content, &entry.links)?)
                }
                None => placeholders.push(rel),
            }
        }

        for link in links {
            embedded = embedded.link(link);
        }

        let built = embedded.build();
        let collection_links = built.links().clone();
        let mut entries = built.into_content();
        for rel in placeholders {
            if entries.iter().any(|entry| entry.rel() == &rel) {
                continue;
            }
            entries.push(wrappers.empty_collection_of(rel));
        }
        // Stable, so entries keep their order within a relation.
        entries.sort_by_key(|entry| {
            first_seen
                .get(entry.rel())
                .copied()
                .unwrap_or(usize::MAX)
        });

        debug!(entries = entries.len(), "Rendering embedded collection");
        Ok(CollectionModel::of(entries, collection_links).to_hal(config)?)
    }
}

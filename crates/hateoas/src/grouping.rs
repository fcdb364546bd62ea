//! Insertion-ordered grouping of models by link relation.

use std::collections::HashMap;

use tracing::trace;

use crate::link::LinkRelation;

/// Models grouped by relation.
///
/// Relations iterate in the order they were first inserted; models within a
/// relation iterate in insertion order. Backed by a vector of groups plus an
/// index from relation to group position.
#[derive(Debug, Clone)]
pub struct RelationGroups<M> {
    groups: Vec<(LinkRelation, Vec<M>)>,
    index: HashMap<LinkRelation, usize>,
}

impl<M> RelationGroups<M> {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends a model to its relation's group, creating the group at the end
    /// of the relation order if the relation is new.
    pub fn insert(&mut self, rel: LinkRelation, model: M) {
        let position = match self.index.get(&rel) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                trace!(rel = %rel, position, "New embedded relation group");
                self.index.insert(rel.clone(), position);
                self.groups.push((rel, Vec::new()));
                position
            }
        };
        self.groups[position].1.push(model);
    }

    /// Returns the models grouped under a relation.
    pub fn get(&self, rel: &LinkRelation) -> Option<&[M]> {
        self.index
            .get(rel)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Returns the relations in first-seen order.
    pub fn relations(&self) -> impl Iterator<Item = &LinkRelation> {
        self.groups.iter().map(|(rel, _)| rel)
    }

    /// Iterates `(relation, models)` groups in first-seen relation order.
    pub fn iter(&self) -> impl Iterator<Item = (&LinkRelation, &[M])> {
        self.groups
            .iter()
            .map(|(rel, models)| (rel, models.as_slice()))
    }

    /// Returns the number of distinct relations.
    pub fn relation_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total number of models across all relations.
    pub fn model_count(&self) -> usize {
        self.groups.iter().map(|(_, models)| models.len()).sum()
    }

    /// Returns whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flattens into `(model, relation)` pairs, relation-major in first-seen
    /// order and insertion order within each relation.
    pub fn into_flattened(self) -> impl Iterator<Item = (M, LinkRelation)> {
        self.groups.into_iter().flat_map(|(rel, models)| {
            models
                .into_iter()
                .map(move |model| (model, rel.clone()))
        })
    }
}

impl<M> Default for RelationGroups<M> {
    fn default() -> Self {
        Self::new()
    }
}

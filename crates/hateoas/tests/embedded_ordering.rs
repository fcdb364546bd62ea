//! Ordering guarantees of the embedded model builder.
//!
//! Output is grouped by relation in the order relations were first added,
//! and within a relation in the order models were added.

mod common;

use std::fmt::Debug;

use helios_hateoas::builder;
use helios_hateoas::{
    EmbeddedModelBuilder, EmbeddedValue, EmbeddedWrapper, Link, LinkRelation, RepresentationModel,
};
use proptest::prelude::*;

fn labels<M: Copy + Debug>(entries: &[EmbeddedWrapper<M>]) -> Vec<(String, M)> {
    entries
        .iter()
        .map(|entry| match entry.value() {
            EmbeddedValue::Element(model) => (entry.rel().value().to_string(), *model),
            other => panic!("Expected element wrapper, got {:?}", other),
        })
        .collect()
}

fn rel(name: &'static str) -> LinkRelation {
    LinkRelation::of(name)
}

#[test]
fn test_relation_repeated_later_joins_its_first_group() {
    let collection = builder::sub_model(rel("A"), "m1")
        .sub_model(rel("B"), "m2")
        .sub_model(rel("A"), "m3")
        .build();

    assert_eq!(
        labels(collection.content()),
        vec![
            ("A".to_string(), "m1"),
            ("A".to_string(), "m3"),
            ("B".to_string(), "m2"),
        ]
    );
}

#[test]
fn test_non_contiguous_repeats_are_not_interleaved() {
    let collection = builder::sub_model(rel("A"), "m1")
        .sub_model(rel("B"), "m2")
        .sub_model(rel("A"), "m3")
        .sub_model(rel("B"), "m4")
        .build();

    assert_eq!(
        labels(collection.content()),
        vec![
            ("A".to_string(), "m1"),
            ("A".to_string(), "m3"),
            ("B".to_string(), "m2"),
            ("B".to_string(), "m4"),
        ]
    );
}

#[test]
fn test_parsed_and_constant_relations_share_a_group() {
    let collection = builder::sub_model(rel("self"), 1)
        .sub_model(LinkRelation::parse("other").unwrap(), 2)
        .sub_model(helios_hateoas::IanaLinkRelations::SELF, 3)
        .build();

    assert_eq!(
        labels(collection.content()),
        vec![
            ("self".to_string(), 1),
            ("self".to_string(), 3),
            ("other".to_string(), 2),
        ]
    );
}

#[test]
fn test_empty_builder_with_link() {
    let collection = EmbeddedModelBuilder::<u8>::new()
        .link(Link::of("http://localhost/l1"))
        .build();

    assert!(collection.content().is_empty());
    assert_eq!(
        collection.links().as_slice(),
        &[Link::of("http://localhost/l1")]
    );
}

#[test]
fn test_models_keep_their_own_links() {
    let collection = builder::sub_model(common::orders(), common::order_model(1))
        .sub_model(common::orders(), common::order_model(2))
        .link(Link::of("http://localhost/orders"))
        .build();

    for (entry, id) in collection.iter().zip([1, 2]) {
        let EmbeddedValue::Element(model) = entry.value() else {
            panic!("Expected element wrapper");
        };
        assert_eq!(model.content().id, id);
        assert_eq!(model.links().len(), 1);
    }
    assert_eq!(collection.links().len(), 1);
}

/// Expected output computed independently of the builder: for each relation
/// in first-seen order, all of its models in call order.
fn expected_order(calls: &[(u8, u32)]) -> Vec<(String, u32)> {
    let mut seen: Vec<u8> = Vec::new();
    for (rel, _) in calls {
        if !seen.contains(rel) {
            seen.push(*rel);
        }
    }
    seen.iter()
        .flat_map(|rel| {
            calls
                .iter()
                .filter(move |(r, _)| r == rel)
                .map(|(r, model)| (format!("rel-{}", r), *model))
        })
        .collect()
}

proptest! {
    /// Property: output is first-seen-relation-major, insertion-minor
    #[test]
    fn prop_grouping_is_stable(calls in prop::collection::vec((0u8..5, any::<u32>()), 0..40)) {
        let builder = calls.iter().fold(EmbeddedModelBuilder::new(), |builder, (r, model)| {
            builder.sub_model(LinkRelation::of(format!("rel-{}", r)), *model)
        });
        let collection = builder.build();

        prop_assert_eq!(labels(collection.content()), expected_order(&calls));
    }

    /// Property: building a clone yields the same result as building the original
    #[test]
    fn prop_build_is_repeatable(calls in prop::collection::vec((0u8..3, any::<u16>()), 0..20)) {
        let builder = calls.iter().fold(EmbeddedModelBuilder::new(), |builder, (r, model)| {
            builder.sub_model(LinkRelation::of(format!("rel-{}", r)), *model)
        });

        prop_assert_eq!(builder.clone().build(), builder.build());
    }
}

//! HAL documents produced from builder output.

mod common;

use common::{customer_model, customers, json_model, order_model, orders};
use helios_hateoas::builder;
use helios_hateoas::hal::{HAL_JSON, ToHal, to_hal_string};
use helios_hateoas::{EmbeddedWrappers, HalConfiguration, IanaLinkRelations, Link};
use serde_json::json;

#[test]
fn test_embedded_document() {
    let dashboard = builder::sub_model(
        orders(),
        json_model("/orders/1", json!({"id": 1, "status": "open"})),
    )
    .sub_model(customers(), json_model("/customers/ada", json!({"name": "ada"})))
    .sub_model(
        orders(),
        json_model("/orders/2", json!({"id": 2, "status": "open"})),
    )
    .link(Link::of("http://localhost/dashboard"))
    .build();

    let hal = dashboard.to_hal(&HalConfiguration::default()).unwrap();
    assert_eq!(
        hal,
        json!({
            "_embedded": {
                "orders": [
                    {
                        "id": 1,
                        "status": "open",
                        "_links": {"self": {"href": "http://localhost/orders/1"}}
                    },
                    {
                        "id": 2,
                        "status": "open",
                        "_links": {"self": {"href": "http://localhost/orders/2"}}
                    }
                ],
                "customers": {
                    "name": "ada",
                    "_links": {"self": {"href": "http://localhost/customers/ada"}}
                }
            },
            "_links": {"self": {"href": "http://localhost/dashboard"}}
        })
    );
}

#[test]
fn test_embedded_document_with_prefer_collections() {
    let config = HalConfiguration {
        prefer_collections: true,
        ..Default::default()
    };
    let dashboard = builder::sub_model(customers(), customer_model("ada"))
        .wrappers(config.wrappers())
        .build();

    let hal = dashboard.to_hal(&config).unwrap();
    assert!(hal["_embedded"]["customers"].is_array());
}

#[test]
fn test_collection_document_uses_collection_rel() {
    let collection = builder::model(order_model(1))
        .model(order_model(2))
        .link(Link::new(
            "http://localhost/orders?page=2",
            IanaLinkRelations::NEXT,
        ))
        .build();

    let hal = collection.to_hal(&HalConfiguration::for_testing()).unwrap();
    assert_eq!(hal["_embedded"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(
        hal["_links"]["next"],
        json!([{"href": "http://localhost/orders?page=2"}])
    );
}

#[test]
fn test_entity_string_rendering_is_compact_by_default() {
    let order = builder::model(order_model(3)).build();
    let rendered = to_hal_string(&order, &HalConfiguration::default()).unwrap();
    assert_eq!(
        rendered,
        r#"{"id":3,"status":"open","_links":{"self":{"href":"http://localhost/orders/3"}}}"#
    );
}

#[test]
fn test_hal_media_type() {
    assert_eq!(HAL_JSON, "application/hal+json");
}

#[test]
fn test_empty_placeholder_next_to_built_entries() {
    let wrappers = EmbeddedWrappers::default();
    let mut entries = builder::sub_model(orders(), order_model(1))
        .build()
        .into_content();
    entries.push(wrappers.empty_collection_of(customers()));

    let collection = helios_hateoas::CollectionModel::of(entries, Vec::new());
    let hal = collection.to_hal(&HalConfiguration::default()).unwrap();
    assert_eq!(hal["_embedded"]["customers"], json!([]));
    assert_eq!(hal["_embedded"]["orders"]["id"], 1);
}

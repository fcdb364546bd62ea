//! Shared fixtures for helios-hateoas integration tests.

#![allow(dead_code)]

use helios_hateoas::{EntityModel, Link, LinkRelation};
use serde::Serialize;

/// A minimal order resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u32,
    pub status: String,
}

impl Order {
    pub fn new(id: u32, status: &str) -> Self {
        Self {
            id,
            status: status.to_string(),
        }
    }
}

/// A minimal customer resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub name: String,
}

/// Wraps an order with its self link.
pub fn order_model(id: u32) -> EntityModel<Order> {
    EntityModel::of_with_links(
        Order::new(id, "open"),
        vec![Link::of(format!("http://localhost/orders/{}", id))],
    )
}

/// Wraps a customer with its self link.
pub fn customer_model(name: &str) -> EntityModel<Customer> {
    EntityModel::of_with_links(
        Customer {
            name: name.to_string(),
        },
        vec![Link::of(format!("http://localhost/customers/{}", name))],
    )
}

pub fn orders() -> LinkRelation {
    LinkRelation::of("orders")
}

pub fn customers() -> LinkRelation {
    LinkRelation::of("customers")
}

/// Wraps arbitrary JSON content with a self link, for mixing resource kinds
/// in one embedded collection.
pub fn json_model(path: &str, body: serde_json::Value) -> EntityModel<serde_json::Value> {
    EntityModel::of_with_links(body, vec![Link::of(format!("http://localhost{}", path))])
}

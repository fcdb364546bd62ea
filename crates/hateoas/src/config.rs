//! HAL rendering configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HAL_RENDER_SINGLE_LINKS_AS_ARRAY` | false | Render a relation with one link as an array |
//! | `HAL_PREFER_COLLECTIONS` | false | Embed single models as one-item arrays |
//! | `HAL_COLLECTION_REL` | content | Relation used to embed the items of a plain collection |
//! | `HAL_PRETTY` | false | Pretty-print rendered documents |
//!
//! Flag variables are false when unset or set to `0`, `false`, `no`, `n`,
//! `off` or `f` (any case), and true for any other value.
//!
//! # Example
//!
//! ```rust
//! use helios_hateoas::HalConfiguration;
//!
//! let config = HalConfiguration {
//!     collection_rel: "orders".to_string(),
//!     pretty: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

use crate::embedded::EmbeddedWrappers;
use crate::link::LinkRelation;

/// Configuration for rendering models as HAL documents.
///
/// Can be built from environment variables with [`HalConfiguration::from_env`],
/// flattened into a command line parser, or constructed directly.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "hal")]
pub struct HalConfiguration {
    /// Render a relation with a single link as a one-element array.
    #[arg(
        long,
        env = "HAL_RENDER_SINGLE_LINKS_AS_ARRAY",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub render_single_links_as_array: bool,

    /// Embed single models as one-item arrays instead of objects.
    #[arg(
        long,
        env = "HAL_PREFER_COLLECTIONS",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub prefer_collections: bool,

    /// Relation under which the items of a plain collection are embedded.
    #[arg(long, env = "HAL_COLLECTION_REL", default_value = "content")]
    pub collection_rel: String,

    /// Pretty-print rendered documents.
    #[arg(
        long,
        env = "HAL_PRETTY",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub pretty: bool,
}

impl Default for HalConfiguration {
    fn default() -> Self {
        Self {
            render_single_links_as_array: false,
            prefer_collections: false,
            collection_rel: "content".to_string(),
            pretty: false,
        }
    }
}

impl HalConfiguration {
    /// Creates a configuration from environment variables only, falling back
    /// to defaults when they are missing or malformed.
    pub fn from_env() -> Self {
        Self::try_parse_from(["hal"]).unwrap_or_default()
    }

    /// Returns the wrapper factory matching this configuration.
    pub fn wrappers(&self) -> EmbeddedWrappers {
        EmbeddedWrappers::new(self.prefer_collections)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = LinkRelation::parse(&self.collection_rel) {
            errors.push(format!("Collection relation is invalid: {}", e));
        }

        if self.collection_rel.starts_with('_') {
            errors.push("Collection relation cannot start with '_'".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Output is compact and single links render as arrays so that shapes
    /// are uniform in assertions.
    pub fn for_testing() -> Self {
        Self {
            render_single_links_as_array: true,
            prefer_collections: false,
            collection_rel: "items".to_string(),
            pretty: false,
        }
    }
}

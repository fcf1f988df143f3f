#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Entity-to-POI rendering dispatch engine.
//!
//! Each supported NGSI entity type has a renderer that turns one entity into
//! one [`ngsi_poi_models::Poi`]: an icon chosen by a type-specific rule, a
//! title with a fallback chain, and an HTML info-window assembled from
//! whatever fields the producer actually sent. [`registry`] maps type names
//! to renderers and applies the skip rules for unsupported or location-less
//! entities.

pub mod classify;
pub mod context;
pub mod format;
pub mod html;
pub mod parsing;
pub mod registry;
pub mod renderers;
pub mod tables;

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch entry point.
//!
//! One invocation takes one payload (a JSON-encoded string or an already
//! decoded value), normalizes it to a list of entities, dispatches each one
//! through the renderer registry and hands the surviving POIs to the output
//! sink. Input-shape problems abort the whole batch before any rendering;
//! per-entity problems only drop that entity.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::Poi;
use ngsi_poi_render::context::RenderContext;
use ngsi_poi_render::registry::entity_to_poi;
use serde_json::Value;
use thiserror::Error;

/// One input batch: a single entity or an array of them, either still
/// JSON-encoded or already decoded upstream.
#[derive(Debug, Clone)]
pub enum Payload {
    Text(String),
    Json(Value),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Faults that abort a batch before any entity is rendered.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed JSON payload: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("payload is not an entity or a list of entities")]
    UnexpectedShape,
}

/// Normalizes a payload into a list of entities.
///
/// A single object is wrapped into a one-element list. Scalars, arrays of
/// scalars and objects missing `id` or `type` are input-shape faults.
pub fn parse_entities(payload: Payload) -> Result<Vec<Entity>, InputError> {
    let value = match payload {
        Payload::Text(text) => {
            serde_json::from_str(&text).map_err(InputError::MalformedJson)?
        }
        Payload::Json(value) => value,
    };
    let items = match value {
        Value::Array(items) => items,
        value @ Value::Object(_) => vec![value],
        _ => return Err(InputError::UnexpectedShape),
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|_| InputError::UnexpectedShape))
        .collect()
}

/// Transforms one payload into its POI list, preserving input order and
/// dropping skipped entities.
pub fn process(payload: Payload, ctx: &RenderContext) -> Result<Vec<Poi>, InputError> {
    let entities = parse_entities(payload)?;
    Ok(entities
        .iter()
        .filter_map(|entity| entity_to_poi(entity, ctx))
        .collect())
}

/// Output channel for rendered batches.
pub trait PoiSink {
    fn emit(&mut self, pois: &[Poi]);
}

/// Runs one batch and emits the result exactly once, even when every entity
/// was skipped. On an input-shape fault nothing is emitted.
pub fn process_into(
    payload: Payload,
    ctx: &RenderContext,
    sink: &mut dyn PoiSink,
) -> Result<(), InputError> {
    let pois = process(payload, ctx)?;
    sink.emit(&pois);
    Ok(())
}

//! Request orchestration: compile, decode the input, then execute the mode.
//!
//! The stage order decides which error a request with several problems
//! reports. A broken template wins over broken JSON, and both win over an
//! unknown mode.

use jl_core::{
    EntityRender, RenderError, RenderMode, RenderOutput, RenderRequest, RenderResponse,
    RenderResult, ENTITY_FIELD, ENTITY_RESULT_FIELD,
};
use minijinja::{context, Template};
use serde_json::Value as Json;

use crate::environment::TemplateEngine;
use crate::value::json_to_value;

/// Render a request with the shared engine
pub fn render_request(request: &RenderRequest) -> RenderResult<RenderOutput> {
    render_with(TemplateEngine::shared(), request)
}

/// Render a request with a specific engine
pub fn render_with(engine: &TemplateEngine, request: &RenderRequest) -> RenderResult<RenderOutput> {
    log::debug!(
        "Rendering in {} mode ({} byte template, {} byte input)",
        request.mode,
        request.template.len(),
        request.input_json.len()
    );
    if request.context.is_some() {
        log::debug!("Ignoring request context");
    }

    let template = engine.compile(&request.template)?;
    let document = request.parse_input()?;

    match &request.mode {
        RenderMode::Render => {
            let ctx = context! { input_json => json_to_value(&document) };
            engine.render(&template, ctx).map(RenderOutput::Single)
        }
        RenderMode::Entity => render_entities(engine, &template, &document).map(RenderOutput::Entities),
        RenderMode::Unknown(mode) => Err(RenderError::UnknownMode { mode: mode.clone() }),
    }
}

/// Render once per entity, in input order
fn render_entities(
    engine: &TemplateEngine,
    template: &Template<'_, '_>,
    document: &Json,
) -> RenderResult<Vec<EntityRender>> {
    let entities = document.as_array().ok_or(RenderError::InvalidShape)?;

    entities
        .iter()
        .map(|element| {
            let entity = element
                .get(ENTITY_FIELD)
                .ok_or_else(|| missing_field(ENTITY_FIELD))?;
            let result = element
                .get(ENTITY_RESULT_FIELD)
                .ok_or_else(|| missing_field(ENTITY_RESULT_FIELD))?;
            if !result.is_object() {
                return Err(RenderError::TemplateRuntime {
                    message: format!("{ENTITY_RESULT_FIELD} of {entity} must be an object"),
                });
            }

            let render = engine.render(template, json_to_value(result))?;
            Ok(EntityRender {
                entity: entity.clone(),
                render,
            })
        })
        .collect()
}

fn missing_field(field: &str) -> RenderError {
    RenderError::MissingField {
        field: field.to_string(),
    }
}

/// Handle a raw `POST /render` body and build the response envelope
pub fn handle_payload(body: &[u8]) -> RenderResponse {
    let result = RenderRequest::from_slice(body).and_then(|request| render_request(&request));
    if let Err(err) = &result {
        log::debug!("Render failed with {}: {}", err.kind_name(), err);
    }
    RenderResponse::from(result)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

//! Front matter builder for subagent definition files.

use super::{text_list, FieldValue, TemplateBuilder};
use crate::entity::Entity;
use crate::scalar::Scalar;

/// Builder for the `agents` template kind.
///
/// Field order is fixed: name, description, model, tools, max-turns,
/// background. Providers key on these names, so the order and spelling
/// stay stable across releases.
#[derive(Debug, Clone)]
pub struct AgentsBuilder;

impl TemplateBuilder for AgentsBuilder {
    fn front_matter(&self, entity: &Entity) -> Vec<(&'static str, FieldValue)> {
        let mut fields = Vec::new();
        fields.push(("name", FieldValue::Scalar(Scalar::from(entity.name.clone()))));
        if let Some(description) = &entity.description {
            fields.push((
                "description",
                FieldValue::Scalar(Scalar::from(description.clone())),
            ));
        }
        if let Some(model) = &entity.model {
            fields.push(("model", FieldValue::Scalar(Scalar::from(model.clone()))));
        }
        if !entity.tools.is_empty() {
            fields.push(("tools", FieldValue::List(text_list(&entity.tools))));
        }
        if let Some(max_turns) = entity.max_turns {
            fields.push(("max-turns", FieldValue::Scalar(Scalar::from(max_turns))));
        }
        if let Some(background) = entity.background {
            fields.push(("background", FieldValue::Scalar(Scalar::Bool(background))));
        }
        fields
    }

    fn body<'a>(&self, entity: &'a Entity) -> Option<&'a str> {
        entity.prompt.as_deref()
    }
}

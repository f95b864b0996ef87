//! Front matter builder for slash command files.

use super::{text_list, FieldValue, TemplateBuilder};
use crate::entity::Entity;
use crate::scalar::Scalar;

/// Builder for the `commands` template kind.
///
/// Commands carry no `name` field in front matter; providers derive the
/// command name from the file name. Tools are emitted under the
/// `allowed-tools` key used by command front matter.
#[derive(Debug, Clone)]
pub struct CommandsBuilder;

impl TemplateBuilder for CommandsBuilder {
    fn front_matter(&self, entity: &Entity) -> Vec<(&'static str, FieldValue)> {
        let mut fields = Vec::new();
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
            fields.push(("allowed-tools", FieldValue::List(text_list(&entity.tools))));
        }
        fields
    }

    fn body<'a>(&self, entity: &'a Entity) -> Option<&'a str> {
        entity.prompt.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_fixed() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "deploy",
            "description": "Deploy the service",
            "model": "claude-2",
            "tools": ["bash"],
        }))
        .unwrap();
        let fields = CommandsBuilder.front_matter(&entity);
        let keys: Vec<_> = fields.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["description", "model", "allowed-tools"]);
    }

    #[test]
    fn test_name_is_never_emitted() {
        let entity = Entity::from_value(serde_json::json!({ "name": "deploy" })).unwrap();
        assert!(CommandsBuilder.front_matter(&entity).is_empty());
    }
}

//! Entity compilation for Agentc.
//!
//! [`compile_entity_for_provider`] is the core operation of the library: it
//! takes one entity, one provider, and one template kind, and produces the
//! full text of the output document. The result is a front matter block
//! fenced by `---` lines followed by the rendered prompt body. Compilation
//! is pure; callers decide where the document goes (see [`crate::writer`]).
//!
//! # Examples
//!
//! ```
//! use agentc_core::compile::compile_entity_for_provider;
//! use agentc_core::entity::Entity;
//! use agentc_core::provider::Provider;
//! use agentc_core::template::TemplateKind;
//!
//! let entity = Entity::from_value(serde_json::json!({
//!     "name": "tst",
//!     "model": "claude-2",
//!     "prompt": "do it",
//! })).unwrap();
//!
//! let doc = compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).unwrap();
//! assert!(doc.starts_with("---\n"));
//! assert!(doc.contains("model: claude-2\n"));
//! ```

use tera::{Context, Tera};

use crate::builders::{builder_for, FieldValue};
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::scalar::{format_scalar, format_sequence};
use crate::template::TemplateKind;

/// Compile `entity` into the document text for `provider` and `kind`.
///
/// Front matter fields come from the kind's builder in a fixed order; the
/// body is the entity's prompt run through the template engine with the
/// entity fields and the provider name in scope.
///
/// # Errors
///
/// Returns [`Error::ProviderDisabled`] when the entity's `providers` map
/// carries an explicit `false` for `provider`, and [`Error::Tera`] when the
/// prompt fails to render. A provider absent from the map is enabled.
pub fn compile_entity_for_provider(
    entity: &Entity,
    provider: Provider,
    kind: TemplateKind,
) -> Result<String> {
    if !entity.enabled_for(provider.as_str()) {
        return Err(Error::ProviderDisabled {
            entity: entity.name.clone(),
            provider: provider.as_str().to_string(),
        });
    }

    log::debug!(
        "Compiling entity '{}' for provider '{}' ({})",
        entity.name,
        provider,
        kind
    );

    let builder = builder_for(kind);

    let mut document = String::from("---\n");
    for (key, value) in builder.front_matter(entity) {
        match value {
            FieldValue::Scalar(scalar) => document.push_str(&format_scalar(key, &scalar)),
            FieldValue::List(items) => document.push_str(&format_sequence(key, &items)),
        }
    }
    document.push_str("---\n");

    if let Some(prompt) = builder.body(entity) {
        let body = render_body(prompt, entity, provider)?;
        let body = body.trim_end();
        if !body.is_empty() {
            document.push('\n');
            document.push_str(body);
            document.push('\n');
        }
    }

    Ok(document)
}

/// Render the prompt body, exposing entity fields and the provider name
/// as template variables.
fn render_body(prompt: &str, entity: &Entity, provider: Provider) -> Result<String> {
    let mut context = Context::new();
    context.insert("name", &entity.name);
    context.insert("description", &entity.description);
    context.insert("model", &entity.model);
    context.insert("tools", &entity.tools);
    context.insert("max_turns", &entity.max_turns);
    context.insert("background", &entity.background);
    context.insert("provider", provider.as_str());

    let rendered = Tera::one_off(prompt, &context, false)?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entity() -> Entity {
        Entity::from_value(serde_json::json!({
            "name": "tst",
            "description": "desc",
            "prompt": "do it",
            "model": "claude-2",
            "tools": ["git", "fs"],
            "providers": { "claude": true },
        }))
        .unwrap()
    }

    #[test]
    fn test_compile_agents_document() {
        let doc =
            compile_entity_for_provider(&sample_entity(), Provider::Claude, TemplateKind::Agents)
                .unwrap();
        assert_eq!(
            doc,
            concat!(
                "---\n",
                "name: tst\n",
                "description: desc\n",
                "model: claude-2\n",
                "tools:\n",
                "  - git\n",
                "  - fs\n",
                "---\n",
                "\n",
                "do it\n",
            )
        );
    }

    #[test]
    fn test_compile_contains_model_field() {
        let doc =
            compile_entity_for_provider(&sample_entity(), Provider::Claude, TemplateKind::Agents)
                .unwrap();
        assert!(doc.contains("model: claude-2\n"));
    }

    #[test]
    fn test_explicit_false_is_disabled() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "tst",
            "prompt": "do it",
            "providers": { "claude": false },
        }))
        .unwrap();
        match compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents) {
            Err(Error::ProviderDisabled { entity, provider }) => {
                assert_eq!(entity, "tst");
                assert_eq!(provider, "claude");
            }
            other => panic!("expected ProviderDisabled, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_provider_is_enabled() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "tst",
            "providers": { "codex": false },
        }))
        .unwrap();
        assert!(
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).is_ok()
        );
    }

    #[test]
    fn test_multiline_description_becomes_block_literal() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "tst",
            "description": "line1\nline2",
        }))
        .unwrap();
        let doc =
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).unwrap();
        assert!(doc.contains("description: |\n  line1\n  line2\n"));
    }

    #[test]
    fn test_reserved_characters_are_quoted() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "tst",
            "description": "a:b",
        }))
        .unwrap();
        let doc =
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).unwrap();
        assert!(doc.contains("description: \"a:b\"\n"));
    }

    #[test]
    fn test_no_prompt_ends_after_front_matter() {
        let entity = Entity::from_value(serde_json::json!({ "name": "tst" })).unwrap();
        let doc =
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).unwrap();
        assert!(doc.ends_with("---\n"));
    }

    #[test]
    fn test_body_interpolates_entity_fields() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "tst",
            "prompt": "You are {{ name }} running on {{ provider }}.",
        }))
        .unwrap();
        let doc =
            compile_entity_for_provider(&entity, Provider::Gemini, TemplateKind::Agents).unwrap();
        assert!(doc.ends_with("You are tst running on gemini.\n"));
    }

    #[test]
    fn test_body_render_error_surfaces() {
        let entity = Entity::from_value(serde_json::json!({
            "name": "tst",
            "prompt": "{{ unclosed",
        }))
        .unwrap();
        assert!(matches!(
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents),
            Err(Error::Tera(_))
        ));
    }

    #[test]
    fn test_compile_commands_document() {
        let doc =
            compile_entity_for_provider(&sample_entity(), Provider::Claude, TemplateKind::Commands)
                .unwrap();
        assert_eq!(
            doc,
            concat!(
                "---\n",
                "description: desc\n",
                "model: claude-2\n",
                "allowed-tools:\n",
                "  - git\n",
                "  - fs\n",
                "---\n",
                "\n",
                "do it\n",
            )
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let entity = sample_entity();
        let first =
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).unwrap();
        let second =
            compile_entity_for_provider(&entity, Provider::Claude, TemplateKind::Agents).unwrap();
        assert_eq!(first, second);
    }
}

//! Template builders that map entities onto front matter layouts.
pub mod agents;
pub mod commands;

use crate::entity::Entity;
use crate::scalar::Scalar;
use crate::template::TemplateKind;

/// One front matter value: a single scalar or an ordered list of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

/// Trait for turning an entity into an ordered front matter field list
/// plus an optional document body.
pub trait TemplateBuilder {
    /// Front matter fields in emission order. Fields the entity does not
    /// populate are omitted, never emitted empty.
    fn front_matter(&self, entity: &Entity) -> Vec<(&'static str, FieldValue)>;

    /// Body template for the document, if the entity defines one.
    fn body<'a>(&self, entity: &'a Entity) -> Option<&'a str>;
}

/// Returns the builder for a template kind.
pub fn builder_for(kind: TemplateKind) -> Box<dyn TemplateBuilder> {
    match kind {
        TemplateKind::Agents => Box::new(agents::AgentsBuilder),
        TemplateKind::Commands => Box::new(commands::CommandsBuilder),
    }
}

pub(crate) fn text_list(items: &[String]) -> Vec<Scalar> {
    items.iter().map(|item| Scalar::from(item.clone())).collect()
}

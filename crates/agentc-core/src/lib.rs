//! Agentc Core Library
//!
//! This library provides the core functionality for compiling agent entity
//! definitions into the configuration files coding agent providers consume.

pub mod builders;
pub mod compile;
pub mod config;
pub mod entity;
pub mod error;
pub mod generate;
pub mod loader;
pub mod provider;
pub mod scalar;
pub mod template;
pub mod utils;
pub mod writer;

pub use crate::{
    compile::compile_entity_for_provider,
    config::Config,
    entity::Entity,
    error::{Error, Result},
    generate::{generate, CompiledDocument, GenerateOptions, GenerateSummary},
    provider::Provider,
    scalar::{format_scalar, needs_quoting, Scalar},
    template::TemplateKind,
};

/// Result type for Agentc compilation operations
pub type AgentcResult<T> = std::result::Result<T, Error>;

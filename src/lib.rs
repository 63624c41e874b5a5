#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! proto2ts turns parsed protocol-definition schemas into typed TypeScript
//! API clients.
//!
//! The crate consumes schema IR built by an external parser (one
//! [`schema::SourceUnit`] per input file), resolves every cross-file type
//! reference into either a nested-scope qualification or an import edge,
//! renders enums, interfaces, and endpoint functions, and returns one
//! generated file per unit. Formatting and filesystem writes stay with the
//! host: the pipeline takes a [`Formatter`] and returns plain strings.

mod codegen;
mod config;
mod error;
pub mod schema;

pub use codegen::{
    generate_files, map_type, resolve_units, FieldAddr, Formatter, GeneratedFile,
    PassthroughFormatter, ResolutionPlan, UnitPlan,
};
pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use schema::units_from_json;

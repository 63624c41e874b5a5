//! Schema IR to TypeScript client generation.
//!
//! The pipeline has three stages:
//! 1. Resolve: walk every unit's fields and build an immutable
//!    [`ResolutionPlan`] of qualified names and import edges (`resolve`)
//! 2. Render: assemble TypeScript source from IR plus plan (`render`)
//! 3. Pipeline: compute output paths, inject the API-client import, apply
//!    the external formatter, collect the output map (`pipeline`)
//!
//! ## Module Structure
//!
//! - `paths`: relative-specifier arithmetic between generated files
//! - `resolve`: cross-file reference resolution into a plan
//! - `render`: pure text assembly of declarations
//! - `pipeline`: whole-run orchestration and validation

mod paths;
mod pipeline;
mod render;
mod resolve;

// Re-export the main entry points
pub use pipeline::{generate_files, Formatter, GeneratedFile, PassthroughFormatter};
pub use render::map_type;
pub use resolve::{resolve_units, FieldAddr, ResolutionPlan, UnitPlan};

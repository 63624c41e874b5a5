//! Whole-run orchestration: validation, resolution, rendering, output paths.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::schema::{Enum, Import, Message, SourceUnit};

use super::render::render_unit;
use super::resolve::{resolve_units, UnitPlan};

/// Pretty-printer collaborator applied to every rendered file.
///
/// The generator itself emits plain, valid TypeScript; hosts plug in their
/// formatter of choice here.
pub trait Formatter {
    /// Format one file's source text.
    fn format(&self, source: &str) -> String;
}

/// Formatter that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl Formatter for PassthroughFormatter {
    fn format(&self, source: &str) -> String {
        source.to_string()
    }
}

/// One generated output file, ready for an external writer to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Output path, derived from the unit identifier by swapping the source
    /// root for the output root and the schema extension for the target one.
    pub path: String,
    /// Rendered (and formatted) file contents.
    pub contents: String,
}

/// Generate one output file per unit, in input order.
///
/// The run fails as a whole on structurally incomplete declarations, on
/// references that leave the source root, and on import collisions; it never
/// swallows an error into empty output.
pub fn generate_files(
    units: &[SourceUnit],
    config: &GeneratorConfig,
    formatter: &dyn Formatter,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    validate_units(units)?;
    let plan = resolve_units(units, config)?;

    let empty_plan = UnitPlan::default();
    let mut files = Vec::with_capacity(units.len());

    for unit in units {
        let unit_plan = plan.unit(&unit.path).unwrap_or(&empty_plan);
        let path = output_path(unit, config);

        let mut imports = Vec::with_capacity(unit_plan.imports.len() + 1);
        if !unit.endpoint_groups.is_empty() {
            // Files that expose endpoints need the configured API client,
            // imported ahead of everything else.
            imports.push(Import {
                module_specifier: config.client_path.clone(),
                symbols: vec![config.client_name.clone()],
            });
        }
        imports.extend(unit_plan.imports.iter().cloned());

        let rendered = render_unit(unit, unit_plan, &imports, &config.client_name);
        let formatted = formatter.format(&rendered);
        let contents = if config.eslint_disable {
            format!("/* eslint-disable */\n{formatted}")
        } else {
            formatted
        };

        debug!(
            unit = %unit.path,
            output = %path,
            imports = imports.len(),
            bytes = contents.len(),
            "Generated client file."
        );

        files.push(GeneratedFile { path, contents });
    }

    Ok(files)
}

fn output_path(unit: &SourceUnit, config: &GeneratorConfig) -> String {
    let rerooted = unit
        .path
        .replacen(&config.source_root, &config.output_root, 1);
    match rerooted.strip_suffix(&config.schema_extension) {
        Some(stem) => format!("{stem}{}", config.output_extension),
        None => rerooted,
    }
}

/// Rendering assumes structurally complete declarations, so missing names and
/// type tokens are rejected up front, naming the offending unit.
fn validate_units(units: &[SourceUnit]) -> Result<(), GenerateError> {
    for unit in units {
        for decl in &unit.enums {
            validate_enum(unit, decl)?;
        }
        for message in &unit.messages {
            validate_message(unit, message)?;
        }
        for group in &unit.endpoint_groups {
            for endpoint in &group.functions {
                if endpoint.name.is_empty() {
                    return Err(GenerateError::schema(&unit.path, "endpoint is missing a name"));
                }
                if endpoint.response.is_empty() {
                    return Err(GenerateError::schema(
                        &unit.path,
                        format!("endpoint '{}' is missing a response type", endpoint.name),
                    ));
                }
                if endpoint.url.is_empty() {
                    return Err(GenerateError::schema(
                        &unit.path,
                        format!("endpoint '{}' is missing a URL", endpoint.name),
                    ));
                }
            }
        }
    }
    Ok(())
}

fn validate_enum(unit: &SourceUnit, decl: &Enum) -> Result<(), GenerateError> {
    if decl.name.is_empty() {
        return Err(GenerateError::schema(&unit.path, "enum is missing a name"));
    }
    for member in &decl.members {
        if member.name.is_empty() {
            return Err(GenerateError::schema(
                &unit.path,
                format!("enum '{}' has a member without a name", decl.name),
            ));
        }
    }
    Ok(())
}

fn validate_message(unit: &SourceUnit, message: &Message) -> Result<(), GenerateError> {
    if message.name.is_empty() {
        return Err(GenerateError::schema(&unit.path, "message is missing a name"));
    }
    for field in &message.fields {
        if field.name.is_empty() {
            return Err(GenerateError::schema(
                &unit.path,
                format!("message '{}' has a field without a name", message.name),
            ));
        }
        if field.ty.is_empty() {
            return Err(GenerateError::schema(
                &unit.path,
                format!(
                    "field '{}' in message '{}' is missing a type",
                    field.name, message.name
                ),
            ));
        }
        if field.map && field.key_type.as_deref().unwrap_or("").is_empty() {
            return Err(GenerateError::schema(
                &unit.path,
                format!(
                    "map field '{}' in message '{}' is missing a key type",
                    field.name, message.name
                ),
            ));
        }
    }
    if let Some(namespace) = &message.nested {
        for decl in &namespace.enums {
            validate_enum(unit, decl)?;
        }
        for nested in &namespace.messages {
            validate_message(unit, nested)?;
        }
    }
    Ok(())
}

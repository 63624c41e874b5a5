//! Generator configuration.

use serde::Deserialize;

/// Configuration of one generation run.
///
/// Loading this from a project file is the host tool's concern; the generator
/// only consumes the resolved values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Directory prefix shared by all unit identifiers (e.g. `proto`).
    pub source_root: String,

    /// Prefix substituted for `source_root` in output paths (e.g. `src/api`).
    pub output_root: String,

    /// Symbol name of the API client imported into files that declare
    /// endpoints (e.g. `webapi`).
    pub client_name: String,

    /// Module specifier the API client is imported from (e.g. `@/lib/webapi`).
    pub client_path: String,

    /// Prepend `/* eslint-disable */` to every generated file.
    #[serde(default = "default_true")]
    pub eslint_disable: bool,

    /// File extension of schema files, stripped when deriving module
    /// specifiers and output paths.
    #[serde(default = "default_schema_extension")]
    pub schema_extension: String,

    /// File extension of generated files.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

fn default_true() -> bool {
    true
}

fn default_schema_extension() -> String {
    ".proto".to_string()
}

fn default_output_extension() -> String {
    ".ts".to_string()
}

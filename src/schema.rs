//! Schema IR structs for serde deserialization.
//!
//! This module defines the in-memory representation of one protocol-definition
//! file as handed over by the external schema parser: enums, messages (with
//! optionally nested declaration scopes), import edges, and endpoint
//! descriptors. The generator treats these values as read-only input.

use serde::Deserialize;

use crate::error::GenerateError;

/// One logical input file and its declarations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    /// Identifier of the unit: the schema file path (e.g. `api/user/user.proto`).
    pub path: String,

    /// Free-text header comment rendered at the top of the generated file.
    #[serde(default)]
    pub comment: String,

    /// Import edges declared by the parser. The resolver folds the edges it
    /// derives from cross-file references into this list.
    #[serde(default)]
    pub imports: Vec<Import>,

    /// Top-level enum declarations, in declaration order.
    #[serde(default)]
    pub enums: Vec<Enum>,

    /// Top-level message declarations, in declaration order.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Endpoint groups. A unit with at least one group gets the configured
    /// API-client import injected ahead of all other imports.
    #[serde(default)]
    pub endpoint_groups: Vec<EndpointGroup>,
}

/// A named-import edge: `import { A, B } from './module'`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    /// Relative path to the imported module, unique within the owning unit.
    pub module_specifier: String,

    /// Imported symbol names, insertion order preserved, no duplicates.
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

/// One enum member. A numeric `initializer` relies on the TypeScript ordinal
/// default; anything else renders as a string-valued member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub initializer: String,
}

/// A message declaration, rendered as a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Scope of declarations nested inside this message. Their names are
    /// visible to sibling fields only through `Namespace.Name` qualification.
    #[serde(default)]
    pub nested: Option<Namespace>,
}

/// A message's owned declaration scope, rendered as a namespace block
/// immediately before the owning interface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Namespace {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// One message field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,

    /// Wire-name alias. When present it replaces `name` in the rendered
    /// property.
    #[serde(default)]
    pub json_name: Option<String>,

    /// Schema type token: a scalar kind (`int32`, `bool`, ...) or the name of
    /// a declared enum or message.
    #[serde(rename = "type")]
    pub ty: String,

    /// Map key type token, set together with the `map` flag.
    #[serde(default)]
    pub key_type: Option<String>,

    #[serde(default)]
    pub repeated: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub map: bool,

    #[serde(default)]
    pub comment: String,

    /// Declared default, surfaced as an `@default` comment line.
    #[serde(default)]
    pub default_value: Option<String>,

    /// Identifier of the unit that declares the referenced type. `None` for
    /// scalar kinds and for types the parser already knows are local.
    #[serde(default)]
    pub origin_unit: Option<String>,
}

/// A group of endpoint functions parsed from one service block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndpointGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub functions: Vec<Endpoint>,
}

/// One generated client function wrapping a single web-API call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Endpoint {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Request message name. Endpoints without a request body omit the `req`
    /// parameter and forward an empty object literal instead.
    #[serde(default)]
    pub request: Option<String>,
    /// Response message name, used as the client call's type argument.
    pub response: String,
    pub url: String,
    pub method: HttpMethod,
}

/// HTTP verb of an endpoint. The lowercase verb doubles as the method name
/// invoked on the configured API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// The client method name for this verb.
    pub fn method_name(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

/// Parse a unit list from a JSON array, in array order.
///
/// The external parser serializes units as an ordered array (not an object
/// map) so that generation order, and with it output diff order, is stable.
pub fn units_from_json(json: &str) -> Result<Vec<SourceUnit>, GenerateError> {
    Ok(serde_json::from_str(json)?)
}

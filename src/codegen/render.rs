//! Text rendering of resolved declarations.
//!
//! Every function here is a pure IR-plus-plan to string transformation. The
//! resolver has already decided qualified names, import lists, and effective
//! optionality; rendering only assembles TypeScript source text.

use crate::schema::{Endpoint, Enum, Field, Import, Message, SourceUnit};

use super::resolve::{FieldAddr, UnitPlan};

const GENERATED_BANNER: &str = "// This file is generated by proto2ts, do not edit it manually.\n";

/// Map a schema type token to its TypeScript counterpart.
///
/// 64-bit and byte-carrying kinds map to `string`: their magnitudes exceed
/// JavaScript's safe-integer range, so values travel as decimal strings
/// instead of silently losing precision. Unknown tokens pass through as
/// declared type names.
pub fn map_type(field: &Field, ty: &str) -> String {
    if field.map {
        let key = field.key_type.as_deref().unwrap_or("string");
        return format!("Map<{}, {}>", key, scalar_type(ty));
    }
    scalar_type(ty).to_string()
}

fn scalar_type(ty: &str) -> &str {
    match ty {
        "bool" => "boolean",
        "int32" | "fixed32" | "uint32" | "float" | "double" => "number",
        "int64" | "uint64" | "fixed64" | "bytes" => "string",
        other => other,
    }
}

/// Render a free-text comment as line comments, one per source line.
/// An empty comment renders as the empty string, no stray markers.
pub fn render_comment(comment: &str) -> String {
    render_comment_indented(comment, 0)
}

fn render_comment_indented(comment: &str, level: usize) -> String {
    if comment.is_empty() {
        return String::new();
    }
    let prefix = "  ".repeat(level);
    let mut out = String::new();
    for line in comment.lines() {
        out.push_str(&prefix);
        out.push_str("// ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_import(import: &Import) -> String {
    format!(
        "import {{ {} }} from '{}'\n",
        import.symbols.join(", "),
        import.module_specifier
    )
}

/// `true` when the initializer relies on the ordinal default, which is the
/// case for anything that reads as a number (including the empty string).
fn is_ordinal_initializer(initializer: &str) -> bool {
    let trimmed = initializer.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok()
}

fn render_enum(decl: &Enum, level: usize) -> String {
    let prefix = "  ".repeat(level);
    let mut out = render_comment_indented(&decl.comment, level);
    out.push_str(&format!("{}export enum {} {{\n", prefix, decl.name));
    for member in &decl.members {
        out.push_str(&render_comment_indented(&member.comment, level + 1));
        if is_ordinal_initializer(&member.initializer) {
            out.push_str(&format!("{}  {},\n", prefix, member.name));
        } else {
            out.push_str(&format!(
                "{}  {} = '{}',\n",
                prefix, member.name, member.initializer
            ));
        }
    }
    out.push_str(&format!("{}}}\n", prefix));
    out
}

fn render_field(field: &Field, plan: &UnitPlan, addr: &FieldAddr, level: usize) -> String {
    let prefix = "  ".repeat(level);

    let mut comment = field.comment.clone();
    if let Some(default) = &field.default_value {
        if !comment.is_empty() {
            comment.push('\n');
        }
        comment.push_str("@default ");
        comment.push_str(default);
    }

    let name = field.json_name.as_deref().unwrap_or(&field.name);
    let marker = if plan.is_optional(addr) { "?" } else { "" };
    let token = plan.type_token(addr, &field.ty);
    let mut ty = map_type(field, token);
    if field.repeated {
        ty.push_str("[]");
    }

    let mut out = render_comment_indented(&comment, level);
    out.push_str(&format!("{}{}{}: {};\n", prefix, name, marker, ty));
    out
}

/// Render one message: its nested namespace block (when present) immediately
/// followed by the interface declaration itself.
fn render_message(message: &Message, plan: &UnitPlan, addr: &[usize], level: usize) -> String {
    let prefix = "  ".repeat(level);
    let mut out = String::new();

    if let Some(namespace) = &message.nested {
        out.push_str(&format!(
            "{}export namespace {} {{\n",
            prefix, namespace.name
        ));
        for decl in &namespace.enums {
            out.push_str(&render_enum(decl, level + 1));
        }
        for (idx, nested) in namespace.messages.iter().enumerate() {
            let mut child = addr.to_vec();
            child.push(idx);
            out.push_str(&render_message(nested, plan, &child, level + 1));
        }
        out.push_str(&format!("{}}}\n", prefix));
    }

    out.push_str(&render_comment_indented(&message.comment, level));
    out.push_str(&format!("{}export interface {} {{\n", prefix, message.name));
    for (field_idx, field) in message.fields.iter().enumerate() {
        let field_addr = FieldAddr::new(addr.to_vec(), field_idx);
        out.push_str(&render_field(field, plan, &field_addr, level + 1));
    }
    out.push_str(&format!("{}}}\n", prefix));
    out
}

fn render_endpoint(endpoint: &Endpoint, client_name: &str) -> String {
    let mut out = render_comment(&endpoint.comment);
    let verb = endpoint.method.method_name();
    match &endpoint.request {
        Some(request) => {
            out.push_str(&format!(
                "export function {}(req: Partial<{}>, config?) {{\n",
                endpoint.name, request
            ));
            out.push_str(&format!(
                "  return {}.{}<{}>('{}', req, config)\n",
                client_name, verb, endpoint.response, endpoint.url
            ));
        }
        None => {
            out.push_str(&format!("export function {}(config?) {{\n", endpoint.name));
            out.push_str(&format!(
                "  return {}.{}<{}>('{}', {{}}, config)\n",
                client_name, verb, endpoint.response, endpoint.url
            ));
        }
    }
    out.push_str("}\n");
    out
}

/// Assemble one generated file: banner, header comment, imports, enums,
/// messages, endpoint functions, in that fixed order.
pub fn render_unit(
    unit: &SourceUnit,
    plan: &UnitPlan,
    imports: &[Import],
    client_name: &str,
) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_BANNER);
    out.push_str(&render_comment(&unit.comment));
    out.push('\n');

    if !imports.is_empty() {
        for import in imports {
            out.push_str(&render_import(import));
        }
        out.push('\n');
    }

    for decl in &unit.enums {
        out.push_str(&render_enum(decl, 0));
        out.push('\n');
    }

    for (idx, message) in unit.messages.iter().enumerate() {
        out.push_str(&render_message(message, plan, &[idx], 0));
        out.push('\n');
    }

    for group in &unit.endpoint_groups {
        for endpoint in &group.functions {
            out.push_str(&render_endpoint(endpoint, client_name));
            out.push('\n');
        }
    }

    out
}

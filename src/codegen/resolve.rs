//! Reference resolution across source units.
//!
//! Resolution is a read-only pass over the schema IR that produces a
//! [`ResolutionPlan`]: for every cross-referencing field either a same-file
//! qualified name or an import edge on the owning unit. Rendering consumes
//! the plan without touching the IR, so a run can be repeated safely and
//! per-file rendering stays independent.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::schema::{Field, Import, Message, SourceUnit};

use super::paths::{relative_specifier, strip_extension};

/// Stable address of a field inside a unit: the chain of message indices
/// (top-level index first, one more per nesting level) plus the field index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldAddr {
    pub messages: Vec<usize>,
    pub field: usize,
}

impl FieldAddr {
    pub fn new(messages: Vec<usize>, field: usize) -> Self {
        Self { messages, field }
    }
}

/// Resolution result for one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitPlan {
    /// Final import list: the unit's declared edges with resolver-created
    /// edges folded in. First-seen order, symbols deduplicated.
    pub imports: Vec<Import>,

    /// Rewritten type tokens, present only for fields the resolver qualified
    /// against a nested declaration scope.
    pub field_types: HashMap<FieldAddr, String>,

    /// Fields that render with the optional marker. Combines the structural
    /// flag with the legacy annotation rule that a field whose comment
    /// mentions `optional` is treated as optional.
    pub optional_fields: HashSet<FieldAddr>,
}

impl UnitPlan {
    /// The type token to render for the field at `addr`, falling back to the
    /// declared token when the resolver left it untouched.
    pub fn type_token<'a>(&'a self, addr: &FieldAddr, declared: &'a str) -> &'a str {
        self.field_types.get(addr).map_or(declared, String::as_str)
    }

    /// Whether the field at `addr` renders with the optional marker.
    pub fn is_optional(&self, addr: &FieldAddr) -> bool {
        self.optional_fields.contains(addr)
    }
}

/// Whole-run resolution plan, keyed by unit identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionPlan {
    units: HashMap<String, UnitPlan>,
}

impl ResolutionPlan {
    /// Plan entry for the unit with the given identifier.
    pub fn unit(&self, path: &str) -> Option<&UnitPlan> {
        self.units.get(path)
    }
}

/// Per-unit accumulator while walking the unit's messages.
#[derive(Default)]
struct UnitState {
    imports: Vec<Import>,
    field_types: HashMap<FieldAddr, String>,
    optional_fields: HashSet<FieldAddr>,
    /// (specifier, symbol) -> defining unit, used to detect two distinct
    /// units landing the same symbol on the same edge.
    edge_origins: HashMap<(String, String), String>,
}

/// Resolve every cross-referencing field of every unit into a plan.
///
/// The input is never mutated; resolving the same units twice yields a
/// structurally identical plan.
pub fn resolve_units(
    units: &[SourceUnit],
    config: &GeneratorConfig,
) -> Result<ResolutionPlan, GenerateError> {
    let mut plan = ResolutionPlan::default();

    for unit in units {
        let mut state = UnitState {
            imports: unit.imports.clone(),
            ..UnitState::default()
        };

        for (idx, message) in unit.messages.iter().enumerate() {
            resolve_message(unit, message, &[idx], config, &mut state)?;
        }

        debug!(
            unit = %unit.path,
            imports = state.imports.len(),
            qualified = state.field_types.len(),
            "Resolved unit references."
        );

        plan.units.insert(
            unit.path.clone(),
            UnitPlan {
                imports: state.imports,
                field_types: state.field_types,
                optional_fields: state.optional_fields,
            },
        );
    }

    Ok(plan)
}

fn resolve_message(
    unit: &SourceUnit,
    message: &Message,
    addr: &[usize],
    config: &GeneratorConfig,
    state: &mut UnitState,
) -> Result<(), GenerateError> {
    for (field_idx, field) in message.fields.iter().enumerate() {
        resolve_field(
            unit,
            message,
            field,
            FieldAddr::new(addr.to_vec(), field_idx),
            config,
            state,
        )?;
    }

    if let Some(namespace) = &message.nested {
        for (idx, nested) in namespace.messages.iter().enumerate() {
            let mut child = addr.to_vec();
            child.push(idx);
            resolve_message(unit, nested, &child, config, state)?;
        }
    }

    Ok(())
}

fn resolve_field(
    unit: &SourceUnit,
    message: &Message,
    field: &Field,
    addr: FieldAddr,
    config: &GeneratorConfig,
    state: &mut UnitState,
) -> Result<(), GenerateError> {
    if field.optional || field.comment.contains("optional") {
        state.optional_fields.insert(addr.clone());
    }

    let Some(origin) = &field.origin_unit else {
        return Ok(());
    };

    if origin == &unit.path {
        // Same file. A token that already carries a scope qualifier is left
        // alone; otherwise the enclosing message's nested scope is searched.
        if field.ty.contains('.') {
            return Ok(());
        }
        if let Some(namespace) = &message.nested {
            let declared = namespace.enums.iter().any(|e| e.name == field.ty)
                || namespace.messages.iter().any(|m| m.name == field.ty);
            if declared {
                state
                    .field_types
                    .insert(addr, format!("{}.{}", namespace.name, field.ty));
            }
        }
        // Not nested: a top-level declaration of this unit, usable as-is.
        return Ok(());
    }

    // Cross-file reference: derive the import edge.
    if !unit.path.starts_with(&config.source_root) || !origin.starts_with(&config.source_root) {
        return Err(GenerateError::PathResolution {
            from: unit.path.clone(),
            to: origin.clone(),
            root: config.source_root.clone(),
        });
    }

    let target = strip_extension(origin, &config.schema_extension);
    let specifier = relative_specifier(&unit.path, target);
    let symbol = field.ty.clone();

    let key = (specifier.clone(), symbol.clone());
    if let Some(first) = state.edge_origins.get(&key) {
        if first != origin {
            return Err(GenerateError::ImportCollision {
                unit: unit.path.clone(),
                specifier,
                symbol,
                first: first.clone(),
                second: origin.clone(),
            });
        }
    } else {
        state.edge_origins.insert(key, origin.clone());
    }

    match state
        .imports
        .iter_mut()
        .find(|edge| edge.module_specifier == specifier)
    {
        Some(edge) => {
            if !edge.symbols.contains(&symbol) {
                edge.symbols.push(symbol);
            }
        }
        None => state.imports.push(Import {
            module_specifier: specifier,
            symbols: vec![symbol],
        }),
    }

    Ok(())
}

//! Integration test for the public generation API.
//!
//! Drives a multi-unit schema through the full pipeline: cross-file
//! references, nested scopes, endpoint units, and an injected formatter.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proto2ts::{
    generate_files, units_from_json, Formatter, GenerateError, GeneratorConfig,
    PassthroughFormatter,
};

fn config() -> GeneratorConfig {
    GeneratorConfig {
        source_root: "proto".to_string(),
        output_root: "src/gen".to_string(),
        client_name: "webapi".to_string(),
        client_path: "@/lib/webapi".to_string(),
        eslint_disable: true,
        schema_extension: ".proto".to_string(),
        output_extension: ".ts".to_string(),
    }
}

const UNITS: &str = r#"[
    {
        "path": "proto/common/types.proto",
        "comment": "Shared types",
        "enums": [{
            "name": "Status",
            "members": [
                { "name": "UNKNOWN", "initializer": "0" },
                { "name": "ACTIVE", "initializer": "ACTIVE" }
            ]
        }],
        "messages": [{
            "name": "Page",
            "fields": [
                { "name": "offset", "type": "int32" },
                { "name": "limit", "type": "int32", "comment": "optional page size" }
            ]
        }]
    },
    {
        "path": "proto/order/order.proto",
        "comment": "Order service",
        "messages": [
            {
                "name": "Order",
                "fields": [
                    { "name": "order_id", "jsonName": "orderId", "type": "int64" },
                    { "name": "status", "type": "Status", "originUnit": "proto/common/types.proto" },
                    { "name": "page", "type": "Page", "originUnit": "proto/common/types.proto" },
                    { "name": "kind", "type": "Kind", "originUnit": "proto/order/order.proto" }
                ],
                "nested": {
                    "name": "Order",
                    "enums": [{
                        "name": "Kind",
                        "members": [{ "name": "RETAIL", "initializer": "RETAIL" }]
                    }]
                }
            },
            {
                "name": "ListOrdersRequest",
                "fields": [{ "name": "page", "type": "Page", "originUnit": "proto/common/types.proto" }]
            }
        ],
        "endpointGroups": [{
            "name": "OrderService",
            "functions": [
                { "name": "listOrders", "request": "ListOrdersRequest", "response": "Order",
                  "url": "/api/order/list", "method": "post" },
                { "name": "ping", "response": "Order", "url": "/api/order/ping", "method": "get" }
            ]
        }]
    }
]"#;

#[test]
fn test_full_generation_run() {
    let units = units_from_json(UNITS).unwrap();
    let files = generate_files(&units, &config(), &PassthroughFormatter).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, "src/gen/common/types.ts");
    assert_eq!(files[1].path, "src/gen/order/order.ts");

    let types = &files[0].contents;
    assert!(types.starts_with("/* eslint-disable */\n"));
    assert!(types.contains("export enum Status {"));
    // The comment annotation marks the field optional.
    assert!(types.contains("  limit?: number;\n"));

    let order = &files[1].contents;
    // One edge for both symbols from the shared unit, deduplicated.
    assert!(order.contains("import { Status, Page } from '../common/types'"));
    assert_eq!(order.matches("from '../common/types'").count(), 1);
    // Client import comes first.
    assert!(
        order.find("import { webapi }").unwrap() < order.find("import { Status, Page }").unwrap()
    );

    assert!(order.contains("  orderId: string;\n"));
    assert!(order.contains("  kind: Order.Kind;\n"));
    assert!(order.contains("export namespace Order {"));

    assert!(order.contains("export function listOrders(req: Partial<ListOrdersRequest>, config?) {"));
    assert!(order.contains("  return webapi.post<Order>('/api/order/list', req, config)\n"));
    assert!(order.contains("export function ping(config?) {"));
    assert!(order.contains("  return webapi.get<Order>('/api/order/ping', {}, config)\n"));
}

#[test]
fn test_injected_formatter_is_applied() {
    struct UppercaseBanner;
    impl Formatter for UppercaseBanner {
        fn format(&self, source: &str) -> String {
            format!("// FORMATTED\n{source}")
        }
    }

    let units = units_from_json(r#"[{ "path": "proto/empty.proto" }]"#).unwrap();
    let files = generate_files(&units, &config(), &UppercaseBanner).unwrap();
    assert!(files[0].contents.starts_with("/* eslint-disable */\n// FORMATTED\n"));
}

#[test]
fn test_reference_outside_source_root_is_reported() {
    let units = units_from_json(
        r#"[{ "path": "proto/order.proto", "messages": [{
            "name": "Order",
            "fields": [{ "name": "x", "type": "External", "originUnit": "vendor/external.proto" }]
        }] }]"#,
    )
    .unwrap();

    let err = generate_files(&units, &config(), &PassthroughFormatter).unwrap_err();
    assert!(matches!(err, GenerateError::PathResolution { .. }));
    let text = err.to_string();
    assert!(text.contains("vendor/external.proto"));
    assert!(text.contains("proto"));
}

#[test]
fn test_repeated_runs_produce_identical_output() {
    let units = units_from_json(UNITS).unwrap();
    let first = generate_files(&units, &config(), &PassthroughFormatter).unwrap();
    let second = generate_files(&units, &config(), &PassthroughFormatter).unwrap();
    assert_eq!(first, second);
}

use bearer_client::error::AppError;
use bearer_client::utils::json::{from_json_or_default, non_blank, to_json, to_json_pretty};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pedido {
    numero_pedido: u32,
    itens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    data_entrega: Option<String>,
}

fn pedido() -> Pedido {
    Pedido {
        numero_pedido: 12,
        itens: vec!["café".to_string(), "pão".to_string()],
        data_entrega: None,
    }
}

#[test]
fn test_to_json_uses_camel_case_and_skips_nulls() {
    let json = to_json(Some(&pedido())).unwrap().unwrap();
    assert_eq!(json, r#"{"numeroPedido":12,"itens":["café","pão"]}"#);
}

#[test]
fn test_to_json_absent_value() {
    assert_eq!(to_json::<Pedido>(None).unwrap(), None);
    assert_eq!(to_json_pretty::<Pedido>(None).unwrap(), None);
}

#[test]
fn test_to_json_unsized_payload() {
    let itens: &[u8] = &[1, 2, 3];
    assert_eq!(to_json(Some(itens)).unwrap().as_deref(), Some("[1,2,3]"));
}

#[test]
fn test_to_json_pretty_is_indented_and_equivalent() {
    let pretty = to_json_pretty(Some(&pedido())).unwrap().unwrap();
    assert!(pretty.contains("\n  \"numeroPedido\": 12"));
    let decoded: Pedido = from_json_or_default(Some(pretty.as_str())).unwrap();
    assert_eq!(decoded, pedido());
}

#[test]
fn test_from_json_or_default_decodes() {
    let decoded: Pedido =
        from_json_or_default(Some(r#"{"numeroPedido":3,"itens":[],"dataEntrega":"2026-10-20"}"#))
            .unwrap();
    assert_eq!(decoded.numero_pedido, 3);
    assert_eq!(decoded.data_entrega.as_deref(), Some("2026-10-20"));
}

#[test]
fn test_from_json_or_default_blank_inputs() {
    let empty: Pedido = from_json_or_default(Some("")).unwrap();
    assert_eq!(empty, Pedido::default());
    let map: HashMap<String, u32> = from_json_or_default(Some("\t\n")).unwrap();
    assert!(map.is_empty());
    let missing: Option<Pedido> = from_json_or_default(None).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_from_json_or_default_type_mismatch() {
    let result: Result<Pedido, AppError> = from_json_or_default(Some(r#"{"numeroPedido":"doze"}"#));
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_non_blank() {
    assert_eq!(non_blank(Some("  x ")), Some("  x "));
    assert_eq!(non_blank(Some("   ")), None);
}

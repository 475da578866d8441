//! A document to translate together with the values of its variables.

use serde::{Deserialize, Serialize};

use query_engine_graphql::graphql::ast::Document;

use super::VariableValues;

/// The input of a translation, as read by the command line and the tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub document: Document,
    #[serde(default)]
    pub variables: VariableValues,
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_ql::ql::ast::Value;

    #[test]
    fn test_variables_are_optional() {
        let request: TranslationRequest =
            serde_json::from_str(r#"{ "document": { "definitions": [] } }"#).unwrap();
        assert!(request.variables.is_empty());
    }

    #[test]
    fn test_decode_variable_values() {
        let request: TranslationRequest = serde_json::from_str(
            r#"{
                "document": { "definitions": [] },
                "variables": { "a": null, "b": true, "c": 1, "d": 1.5, "e": "x", "f": [1, "y"] }
            }"#,
        )
        .unwrap();
        assert_eq!(
            request.variables,
            VariableValues::from([
                ("a".to_string(), Value::Null),
                ("b".to_string(), Value::Boolean(true)),
                ("c".to_string(), Value::Integer(1)),
                ("d".to_string(), Value::Real(1.5)),
                ("e".to_string(), Value::from("x")),
                (
                    "f".to_string(),
                    Value::List(vec![Value::Integer(1), Value::from("y")])
                ),
            ])
        );
    }

    #[test]
    fn test_object_variables_are_rejected() {
        let result: Result<TranslationRequest, _> = serde_json::from_str(
            r#"{ "document": { "definitions": [] }, "variables": { "a": { "b": 1 } } }"#,
        );
        assert!(result.is_err());
    }
}

//! Declarative request validation. Each route declares an ordered rule set;
//! rules are independent and their failures accumulate instead of
//! short-circuiting, so one bad field can surface several entries.

use serde::Serialize;
use serde_json::Value;

/// One validation failure, shaped like a field error entry in the
/// `{errors: [...]}` response body. `value` is omitted when the field is
/// absent from the request.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: &'static str,
    pub path: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Fails for absent, null, and empty-string values. Numbers (including 0)
    /// pass.
    NotEmpty,
    /// JSON numbers and numeric strings pass, everything else fails.
    IsNumeric,
    /// JSON booleans and boolean-ish strings pass, everything else fails.
    IsBoolean,
    /// Custom price check: numeric and strictly positive. An absent or
    /// non-numeric value fails here too, on top of the other price rules.
    GreaterThanZero,
}

/// One declared rule: a check on a single body field with its error message.
pub struct Rule {
    pub path: &'static str,
    pub check: Check,
    pub msg: &'static str,
}

/// Body rules for POST /api/products, in declaration order.
pub const CREATE_RULES: &[Rule] = &[
    Rule {
        path: "name",
        check: Check::NotEmpty,
        msg: "El nombre del producto no puede ir vacío",
    },
    Rule {
        path: "price",
        check: Check::IsNumeric,
        msg: "Valor no válido",
    },
    Rule {
        path: "price",
        check: Check::NotEmpty,
        msg: "El precio del producto no puede ir vacío",
    },
    Rule {
        path: "price",
        check: Check::GreaterThanZero,
        msg: "Precio no válido",
    },
];

/// Body rules for PUT /api/products/:id. Same checks as create plus the
/// availability flag; the wording differs slightly from the create messages
/// and is kept verbatim because clients match on exact strings.
pub const UPDATE_RULES: &[Rule] = &[
    Rule {
        path: "name",
        check: Check::NotEmpty,
        msg: "El nombre de Producto no puede ir vacio",
    },
    Rule {
        path: "price",
        check: Check::IsNumeric,
        msg: "Valor no válido",
    },
    Rule {
        path: "price",
        check: Check::NotEmpty,
        msg: "El precio de Producto no puede ir vacio",
    },
    Rule {
        path: "price",
        check: Check::GreaterThanZero,
        msg: "Precio no válido",
    },
    Rule {
        path: "availability",
        check: Check::IsBoolean,
        msg: "Valor para disponibilidad no válido",
    },
];

impl Check {
    fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Check::NotEmpty => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Check::IsNumeric => match value {
                Some(Value::Number(_)) => true,
                Some(Value::String(s)) => s.parse::<f64>().is_ok(),
                _ => false,
            },
            Check::IsBoolean => match value {
                Some(Value::Bool(_)) => true,
                Some(Value::String(s)) => matches!(s.as_str(), "true" | "false" | "0" | "1"),
                _ => false,
            },
            Check::GreaterThanZero => as_f64(value).map(|n| n > 0.0).unwrap_or(false),
        }
    }
}

fn as_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Runs every rule against the body and collects failures in declaration
/// order. A non-object body fails every rule, same as an empty one.
pub fn check_body(rules: &[Rule], body: &Value) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| {
            let value = body.get(rule.path);
            if rule.check.passes(value) {
                None
            } else {
                Some(FieldError {
                    kind: "field",
                    value: value.cloned(),
                    msg: rule.msg,
                    path: rule.path,
                    location: "body",
                })
            }
        })
        .collect()
}

/// Parses the `:id` path segment. On failure pushes the id error and returns
/// None; the id error always precedes any body errors in the response.
pub fn check_id(raw: &str, errors: &mut Vec<FieldError>) -> Option<i32> {
    match raw.parse::<i32>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(FieldError {
                kind: "field",
                value: Some(Value::String(raw.to_string())),
                msg: "ID no válido",
                path: "id",
                location: "params",
            });
            None
        }
    }
}

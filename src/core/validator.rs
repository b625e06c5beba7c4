use crate::domain::schema::{CapabilitySchema, PLACEHOLDER};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Complete,
    /// (欄位名稱, 說明)，依 schema 宣告順序
    Incomplete {
        header: &'static str,
        missing: Vec<(&'static str, &'static str)>,
    },
}

impl ValidationResult {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self {
            Self::Complete => Vec::new(),
            Self::Incomplete { missing, .. } => missing.iter().map(|(name, _)| *name).collect(),
        }
    }

    /// 編號訊息；完整時回傳 None
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Complete => None,
            Self::Incomplete { header, missing } => {
                let mut message = format!("{}\n", header);
                for (index, (_, description)) in missing.iter().enumerate() {
                    message.push_str(&format!("{}. {}\n", index + 1, description));
                }
                Some(message)
            }
        }
    }
}

/// 與原始工具相同的「falsy」判斷，另外把佔位符 "-" 視為未提供
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty() || text == PLACEHOLDER,
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Bool(flag)) => !flag,
    }
}

/// Checks `arguments` (a JSON object) against every validated field of `schema`.
pub fn check_required_fields(schema: &CapabilitySchema, arguments: &Value) -> ValidationResult {
    let missing: Vec<(&'static str, &'static str)> = schema
        .required_fields()
        .filter(|field| is_missing(arguments.get(field.name)))
        .map(|field| (field.name, field.description))
        .collect();

    if missing.is_empty() {
        ValidationResult::Complete
    } else {
        tracing::debug!(tool = schema.name, missing = ?missing.iter().map(|(n, _)| *n).collect::<Vec<_>>(), "Required fields missing");
        ValidationResult::Incomplete {
            header: schema.missing_fields_header,
            missing,
        }
    }
}

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 送往承運商 API 的請求主體（不含 apiKey，由 client 附加）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarrierRequest {
    #[serde(rename = "modelName")]
    pub model_name: String,
    #[serde(rename = "calledMethod")]
    pub called_method: String,
    #[serde(rename = "methodProperties")]
    pub method_properties: serde_json::Value,
    #[serde(skip)]
    pub authenticated: bool,
}

impl CarrierRequest {
    pub fn new(model_name: &str, called_method: &str, method_properties: serde_json::Value) -> Self {
        Self {
            model_name: model_name.to_string(),
            called_method: called_method.to_string(),
            method_properties,
            authenticated: true,
        }
    }

    pub fn without_api_key(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

/// 失敗回應常帶 `"data": null`，或以物件表示 errors；只有 `success` 是必要的
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarrierResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "entries")]
    pub data: Vec<serde_json::Value>,
    #[serde(default)]
    pub errors: serde_json::Value,
    #[serde(default)]
    pub warnings: serde_json::Value,
    #[serde(default)]
    pub info: serde_json::Value,
}

/// null 視為空序列，單一物件視為只有一筆
fn entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(items) => items,
        other => vec![other],
    })
}

impl CarrierResponse {
    pub fn first_entry(&self) -> Option<&serde_json::Value> {
        self.data.first()
    }
}

/// 承運商的城市識別碼 (Ref)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationIdentifier(String);

impl LocationIdentifier {
    pub const NOT_FOUND: &'static str = "Місто не знайдено";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn not_found() -> Self {
        Self(Self::NOT_FOUND.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        self.0 == Self::NOT_FOUND
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 依宣告順序排列的 (標籤, 值) 對
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledFields(Vec<(String, serde_json::Value)>);

impl LabeledFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &str, value: serde_json::Value) {
        self.0.push((label.to_string(), value));
    }

    pub fn get(&self, label: &str) -> Option<&serde_json::Value> {
        self.0
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    /// 從 `source` 取出 `pairs` 中的欄位，缺少時填入空字串
    pub fn project(source: &serde_json::Value, pairs: &[(&str, &str)]) -> Self {
        let mut fields = Self::new();
        for (key, label) in pairs {
            let value = source
                .get(*key)
                .cloned()
                .unwrap_or_else(|| serde_json::Value::String(String::new()));
            fields.push(label, value);
        }
        fields
    }
}

impl Serialize for LabeledFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// 工具呼叫的結果
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// 驗證提示或承運商回報的失敗訊息
    Message(String),
    Fields(LabeledFields),
    /// 承運商回傳的原始運費值
    Cost(serde_json::Value),
    NoResult,
}

impl ToolOutput {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&LabeledFields> {
        match self {
            Self::Fields(fields) => Some(fields),
            _ => None,
        }
    }
}

impl Serialize for ToolOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(text) => serializer.serialize_str(text),
            Self::Fields(fields) => fields.serialize(serializer),
            Self::Cost(value) => value.serialize(serializer),
            Self::NoResult => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::Fields(fields) => {
                for (label, value) in &fields.0 {
                    match value {
                        serde_json::Value::String(text) => writeln!(f, "{}: {}", label, text)?,
                        other => writeln!(f, "{}: {}", label, other)?,
                    }
                }
                Ok(())
            }
            Self::Cost(value) => write!(f, "{}", value),
            Self::NoResult => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_carrier_field_names() {
        let request = CarrierRequest::new("Address", "searchSettlements", json!({"CityName": "Київ"}));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["modelName"], "Address");
        assert_eq!(value["calledMethod"], "searchSettlements");
        assert_eq!(value["methodProperties"]["CityName"], "Київ");
        assert!(value.get("authenticated").is_none());
    }

    #[test]
    fn test_response_defaults_missing_arrays() {
        let response: CarrierResponse = serde_json::from_value(json!({"success": false})).unwrap();

        assert!(!response.success);
        assert!(response.data.is_empty());
        assert!(response.errors.is_null());
        assert!(response.first_entry().is_none());
    }

    #[test]
    fn test_response_tolerates_null_data_and_keyed_errors() {
        let response: CarrierResponse = serde_json::from_value(json!({
            "success": false,
            "data": null,
            "errors": {"20000100016": "Document number is not correct"},
            "warnings": null,
            "info": null
        }))
        .unwrap();

        assert!(!response.success);
        assert!(response.first_entry().is_none());
        assert_eq!(response.errors["20000100016"], "Document number is not correct");
    }

    #[test]
    fn test_response_wraps_single_data_object() {
        let response: CarrierResponse =
            serde_json::from_value(json!({"success": true, "data": {"Cost": 85}})).unwrap();

        assert_eq!(response.first_entry().unwrap()["Cost"], 85);
    }

    #[test]
    fn test_project_defaults_absent_fields_to_empty_string() {
        let source = json!({"Status": "Отримана", "DocumentWeight": 1.5});
        let fields = LabeledFields::project(
            &source,
            &[("Status", "Статус"), ("DocumentWeight", "Вага"), ("DocumentCost", "Вартість")],
        );

        assert_eq!(fields.labels().count(), 3);
        assert_eq!(fields.get("Статус").unwrap(), "Отримана");
        assert_eq!(fields.get("Вага").unwrap(), &json!(1.5));
        assert_eq!(fields.get("Вартість").unwrap(), "");
    }

    #[test]
    fn test_tool_output_serialization_keeps_label_order() {
        let mut fields = LabeledFields::new();
        fields.push("Статус", json!("В дорозі"));
        fields.push("Адреса відправки", json!("Відділення №1"));

        let text = serde_json::to_string(&ToolOutput::Fields(fields)).unwrap();
        assert_eq!(text, r#"{"Статус":"В дорозі","Адреса відправки":"Відділення №1"}"#);

        assert_eq!(serde_json::to_string(&ToolOutput::NoResult).unwrap(), "null");
        assert_eq!(serde_json::to_string(&ToolOutput::Cost(json!(85))).unwrap(), "85");
    }

    #[test]
    fn test_location_identifier_sentinel() {
        assert!(LocationIdentifier::not_found().is_not_found());
        assert!(!LocationIdentifier::new("e221d64c-391c-11dd-90d9-001a92567626").is_not_found());
    }
}

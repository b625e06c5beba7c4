//! Tool arguments as supplied by the agent framework.
//!
//! Every field is optional at the type level so that absent values reach
//! the field validator instead of failing deserialization.

use crate::domain::schema::PLACEHOLDER;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn warehouse_warehouse() -> String {
    "WarehouseWarehouse".to_string()
}

/// 電話、分局編號等常被代理以數字傳入，一律轉成字串
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

/// 數值欄位：空字串與佔位符視為未提供，數字字串照常解析
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr,
    T::Err: Display,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() || text == PLACEHOLDER {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("expected a number, got \"{}\": {}", text, e)))
        }
        Some(other) => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    #[serde(default)]
    pub item_description: Option<String>,
    #[serde(default = "placeholder")]
    pub sender_name: String,
    #[serde(default = "placeholder", alias = "reciever_name")]
    pub receiver_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub sender_phone: Option<String>,
    #[serde(default, alias = "reciever_phone", deserialize_with = "string_or_number")]
    pub receiver_phone: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub post_sender: Option<String>,
    #[serde(default, alias = "post_reciever", deserialize_with = "string_or_number")]
    pub post_receiver: Option<String>,
}

impl Default for InvoiceRequest {
    fn default() -> Self {
        Self {
            item_description: None,
            sender_name: placeholder(),
            receiver_name: placeholder(),
            sender_phone: None,
            receiver_phone: None,
            post_sender: None,
            post_receiver: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageQuery {
    #[serde(default, alias = "track_number", deserialize_with = "string_or_number")]
    pub tracking_number: Option<String>,
}

impl PackageQuery {
    pub fn new(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: Some(tracking_number.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCostRequest {
    #[serde(default)]
    pub city_sender: Option<String>,
    #[serde(default)]
    pub city_recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cost: Option<u64>,
    /// Cargo, Documents, TiresWheels, Pallet；原樣轉送
    #[serde(default)]
    pub cargo_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub length: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub height: Option<u32>,
    #[serde(default = "warehouse_warehouse")]
    pub service_type: String,
}

impl Default for DeliveryCostRequest {
    fn default() -> Self {
        Self {
            city_sender: None,
            city_recipient: None,
            weight: None,
            cost: None,
            cargo_type: None,
            width: None,
            length: None,
            height: None,
            service_type: warehouse_warehouse(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDateRequest {
    /// dd.mm.yyyy
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub city_sender: Option<String>,
    #[serde(default)]
    pub city_recipient: Option<String>,
}

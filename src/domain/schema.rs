//! Static argument tables for every tool.
//!
//! Field order matters: validation messages enumerate missing fields in
//! declaration order.

use serde_json::{json, Map, Value};

/// Placeholder used as a default for name fields; always reported as missing.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
}

impl FieldKind {
    pub fn json_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    /// 由驗證器檢查；與呼叫端是否有預設值無關
    pub required: bool,
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
            default: None,
        }
    }

    const fn defaulted(
        name: &'static str,
        kind: FieldKind,
        description: &'static str,
        default: &'static str,
        required: bool,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            required,
            default: Some(default),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CapabilitySchema {
    pub name: &'static str,
    pub description: &'static str,
    /// 缺少欄位時訊息的第一行
    pub missing_fields_header: &'static str,
    pub fields: &'static [FieldSpec],
}

impl CapabilitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validated fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }

    /// JSON Schema object advertised to the agent framework.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in self.fields {
            let mut property = json!({
                "type": field.kind.json_type(),
                "description": field.description,
            });
            if let Some(default) = field.default {
                property["default"] = Value::String(default.to_string());
            }
            properties.insert(field.name.to_string(), property);
        }

        // 有預設值的欄位對呼叫端而言是選填
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|field| field.required && field.default.is_none())
            .map(|field| field.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

pub const INVOICE: CapabilitySchema = CapabilitySchema {
    name: "create_invoice",
    description: "Створити накладну на відправлення між відділеннями Нової Пошти",
    missing_fields_header: "Щоб створити накладну потрібно надати:",
    fields: &[
        FieldSpec::required("item_description", FieldKind::String, "Опис відправлення"),
        FieldSpec::defaulted(
            "sender_name",
            FieldKind::String,
            "Прізвище, Ім'я, По батькові відправника",
            PLACEHOLDER,
            true,
        ),
        FieldSpec::defaulted(
            "receiver_name",
            FieldKind::String,
            "Прізвище, Ім'я, По батькові отримувача",
            PLACEHOLDER,
            true,
        ),
        FieldSpec::required("sender_phone", FieldKind::String, "Номер телефону відправника"),
        FieldSpec::required("receiver_phone", FieldKind::String, "Номер телефону отримувача"),
        FieldSpec::required(
            "post_sender",
            FieldKind::String,
            "Номер відділення, звідки здійснюється відправка",
        ),
        FieldSpec::required(
            "post_receiver",
            FieldKind::String,
            "Номер відділення, куди здійснюється доставка",
        ),
    ],
};

pub const PACKAGE: CapabilitySchema = CapabilitySchema {
    name: "get_package_info",
    description: "Дізнатися статус відправлення Нової Пошти за номером накладної",
    missing_fields_header: "Щоб відстежити відправлення потрібно надати:",
    fields: &[FieldSpec::required(
        "tracking_number",
        FieldKind::Integer,
        "Номер відправлення, який складається з 14 цифр",
    )],
};

pub const DELIVERY_COST: CapabilitySchema = CapabilitySchema {
    name: "calculate_delivery_cost",
    description: "Розрахувати вартість доставки між містами",
    missing_fields_header: "Щоб порахувати вартість доставки потрібно надати:",
    fields: &[
        FieldSpec::required("city_sender", FieldKind::String, "Місто відправника"),
        FieldSpec::required("city_recipient", FieldKind::String, "Місто отримувача"),
        FieldSpec::required(
            "cargo_type",
            FieldKind::String,
            "Тип вантажу: Cargo, Documents, TiresWheels, Pallet",
        ),
        FieldSpec::required("cost", FieldKind::Integer, "Оголошена вартість відправлення, грн"),
        FieldSpec::required("weight", FieldKind::Number, "Вага відправлення, кг"),
        FieldSpec::required("height", FieldKind::Integer, "Висота відправлення, сантиметри"),
        FieldSpec::required("width", FieldKind::Integer, "Ширина відправлення, сантиметри"),
        FieldSpec::required("length", FieldKind::Integer, "Довжина відправлення, сантиметри"),
        FieldSpec::defaulted(
            "service_type",
            FieldKind::String,
            "Тип доставки: WarehouseWarehouse, WarehouseDoors, DoorsWarehouse, DoorsDoors",
            "WarehouseWarehouse",
            false,
        ),
    ],
};

pub const DELIVERY_DATE: CapabilitySchema = CapabilitySchema {
    name: "estimate_delivery_date",
    description: "Оцінити дату доставки між містами",
    missing_fields_header: "Щоб оцінити час доставки потрібно надати:",
    fields: &[
        FieldSpec::required("date", FieldKind::String, "Дата відправлення у форматі дд.мм.рррр"),
        FieldSpec::required("city_sender", FieldKind::String, "Назва міста відправника"),
        FieldSpec::required("city_recipient", FieldKind::String, "Назва міста отримувача"),
    ],
};

pub const ALL: [&CapabilitySchema; 4] = [&INVOICE, &PACKAGE, &DELIVERY_COST, &DELIVERY_DATE];

use crate::core::requests::{self, PriceQuote, Seat};
use crate::core::validator::check_required_fields;
use crate::domain::arguments::{
    DeliveryCostRequest, DeliveryDateRequest, InvoiceRequest, PackageQuery,
};
use crate::domain::model::{CarrierResponse, LabeledFields, LocationIdentifier, ToolOutput};
use crate::domain::ports::CarrierApi;
use crate::domain::schema::{self, CapabilitySchema};
use crate::utils::error::{NovaPoshtaError, Result};
use serde::Serialize;
use serde_json::Value;

/// 目前沒有串接真正的建立託運單 API，固定回傳此單號
pub const INVOICE_TRACKING_NUMBER: &str = "20450761462654";

pub const SHIPMENT_NOT_FOUND: &str = "Відправлення не знайдено";
pub const CHECK_YOUR_INPUT: &str = "Перевірте правильність введення даних";

const PACKAGE_LABELS: [(&str, &str); 9] = [
    ("Status", "Статус"),
    ("DateCreated", "Дата створення"),
    ("WarehouseSender", "Адреса відправки"),
    ("WarehouseRecipient", "Адреса доставки"),
    ("DocumentWeight", "Вага"),
    ("VolumeWeight", "Об'ємна вага"),
    ("DocumentCost", "Вартість доставки"),
    ("ScheduledDeliveryDate", "Очікувана дата доставки"),
    ("ActualDeliveryDate", "Фактична дата доставки"),
];

const DELIVERY_DATE_LABELS: [(&str, &str); 2] = [("date", "Дата доставки"), ("timezone", "Часова зона")];

/// 驗證引數；缺欄位時回傳訊息
fn missing_fields_message<T: Serialize>(schema: &CapabilitySchema, arguments: &T) -> Result<Option<String>> {
    let arguments = serde_json::to_value(arguments)?;
    Ok(check_required_fields(schema, &arguments).message())
}

fn first_entry<'a>(response: &'a CarrierResponse, called_method: &str) -> Result<&'a Value> {
    response
        .first_entry()
        .ok_or_else(|| NovaPoshtaError::MalformedResponse {
            called_method: called_method.to_string(),
            message: "success is true but data is empty".to_string(),
        })
}

/// The four Nova Poshta tools over a carrier API.
pub struct NovaPoshtaTools<A: CarrierApi> {
    api: A,
}

impl<A: CarrierApi> NovaPoshtaTools<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn create_invoice(&self, request: &InvoiceRequest) -> Result<ToolOutput> {
        tracing::info!("Tool call: {}", schema::INVOICE.name);

        if let Some(message) = missing_fields_message(&schema::INVOICE, request)? {
            return Ok(ToolOutput::Message(message));
        }

        Ok(ToolOutput::Message(format!(
            "Накладна {} створена.\nВідправник: {}, Отримувач: {}",
            INVOICE_TRACKING_NUMBER, request.sender_name, request.receiver_name
        )))
    }

    pub async fn get_package_info(&self, query: &PackageQuery) -> Result<ToolOutput> {
        tracing::info!("Tool call: {}", schema::PACKAGE.name);

        if let Some(message) = missing_fields_message(&schema::PACKAGE, query)? {
            return Ok(ToolOutput::Message(message));
        }
        let tracking_number = query.tracking_number.as_deref().unwrap_or_default();

        let request = requests::status_documents(tracking_number);
        let response = self.api.send(&request).await?;
        if !response.success {
            return Ok(ToolOutput::message(SHIPMENT_NOT_FOUND));
        }

        let info = first_entry(&response, &request.called_method)?;
        Ok(ToolOutput::Fields(LabeledFields::project(info, &PACKAGE_LABELS)))
    }

    /// 取第一筆結算地的第一個地址 Ref
    ///
    /// 承運商回報失敗時回傳「找不到城市」的佔位值；沒有地址時回傳空字串。
    pub async fn resolve_city(&self, city_name: &str) -> Result<LocationIdentifier> {
        let response = self.api.send(&requests::search_settlements(city_name)).await?;
        if !response.success {
            tracing::debug!("City not found: {}", city_name);
            return Ok(LocationIdentifier::not_found());
        }

        let reference = response
            .first_entry()
            .and_then(|entry| entry.get("Addresses"))
            .and_then(|addresses| addresses.get(0))
            .and_then(|address| address.get("Ref"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        tracing::debug!("Resolved city {} to '{}'", city_name, reference);
        Ok(LocationIdentifier::new(reference))
    }

    pub async fn calculate_delivery_cost(&self, request: &DeliveryCostRequest) -> Result<ToolOutput> {
        tracing::info!("Tool call: {}", schema::DELIVERY_COST.name);

        if let Some(message) = missing_fields_message(&schema::DELIVERY_COST, request)? {
            return Ok(ToolOutput::Message(message));
        }

        let city_sender = self
            .resolve_city(request.city_sender.as_deref().unwrap_or_default())
            .await?;
        let city_recipient = self
            .resolve_city(request.city_recipient.as_deref().unwrap_or_default())
            .await?;

        let carrier_request = requests::document_price(&PriceQuote {
            city_sender: &city_sender,
            city_recipient: &city_recipient,
            service_type: &request.service_type,
            cost: request.cost.unwrap_or_default(),
            cargo_type: request.cargo_type.as_deref().unwrap_or_default(),
            seat: Seat {
                weight: request.weight.unwrap_or_default(),
                width: request.width.unwrap_or_default(),
                length: request.length.unwrap_or_default(),
                height: request.height.unwrap_or_default(),
            },
        });

        let response = self.api.send(&carrier_request).await?;
        if !response.success {
            return Ok(ToolOutput::NoResult);
        }

        let entry = first_entry(&response, &carrier_request.called_method)?;
        let cost = entry
            .get("Cost")
            .cloned()
            .ok_or_else(|| NovaPoshtaError::MalformedResponse {
                called_method: carrier_request.called_method.clone(),
                message: "Cost field is missing".to_string(),
            })?;

        Ok(ToolOutput::Cost(cost))
    }

    pub async fn estimate_delivery_date(&self, request: &DeliveryDateRequest) -> Result<ToolOutput> {
        tracing::info!("Tool call: {}", schema::DELIVERY_DATE.name);

        if let Some(message) = missing_fields_message(&schema::DELIVERY_DATE, request)? {
            return Ok(ToolOutput::Message(message));
        }

        let city_sender = self
            .resolve_city(request.city_sender.as_deref().unwrap_or_default())
            .await?;
        let city_recipient = self
            .resolve_city(request.city_recipient.as_deref().unwrap_or_default())
            .await?;

        let carrier_request = requests::document_delivery_date(
            request.date.as_deref().unwrap_or_default(),
            &city_sender,
            &city_recipient,
        );

        let response = self.api.send(&carrier_request).await?;
        if !response.success {
            return Ok(ToolOutput::message(CHECK_YOUR_INPUT));
        }

        let entry = first_entry(&response, &carrier_request.called_method)?;
        let delivery_date = entry.get("DeliveryDate").unwrap_or(&Value::Null);
        Ok(ToolOutput::Fields(LabeledFields::project(
            delivery_date,
            &DELIVERY_DATE_LABELS,
        )))
    }
}

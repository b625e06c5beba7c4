//! Builders for the four carrier calls used by the tools.

use crate::domain::model::{CarrierRequest, LocationIdentifier};
use serde_json::json;

pub const TRACKING_MODEL: &str = "TrackingDocument";
pub const ADDRESS_MODEL: &str = "Address";
pub const DOCUMENT_MODEL: &str = "InternetDocument";

pub const GET_STATUS_DOCUMENTS: &str = "getStatusDocuments";
pub const SEARCH_SETTLEMENTS: &str = "searchSettlements";
pub const GET_DOCUMENT_PRICE: &str = "getDocumentPrice";
pub const GET_DOCUMENT_DELIVERY_DATE: &str = "getDocumentDeliveryDate";

pub const WAREHOUSE_WAREHOUSE: &str = "WarehouseWarehouse";

/// 單一包裹（seat）的重量與尺寸
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub weight: f64,
    pub width: u32,
    pub length: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct PriceQuote<'a> {
    pub city_sender: &'a LocationIdentifier,
    pub city_recipient: &'a LocationIdentifier,
    pub service_type: &'a str,
    pub cost: u64,
    pub cargo_type: &'a str,
    pub seat: Seat,
}

/// 查詢狀態不帶 apiKey（沿用既有行為，可由設定開啟）
pub fn status_documents(tracking_number: &str) -> CarrierRequest {
    CarrierRequest::new(
        TRACKING_MODEL,
        GET_STATUS_DOCUMENTS,
        json!({
            "Documents": [
                {"DocumentNumber": tracking_number}
            ]
        }),
    )
    .without_api_key()
}

pub fn search_settlements(city_name: &str) -> CarrierRequest {
    CarrierRequest::new(
        ADDRESS_MODEL,
        SEARCH_SETTLEMENTS,
        json!({
            "CityName": city_name,
            "Limit": "1",
            "Page": "1"
        }),
    )
}

pub fn document_price(quote: &PriceQuote<'_>) -> CarrierRequest {
    CarrierRequest::new(
        DOCUMENT_MODEL,
        GET_DOCUMENT_PRICE,
        json!({
            "CitySender": quote.city_sender,
            "CityRecipient": quote.city_recipient,
            "Weight": quote.seat.weight,
            "ServiceType": quote.service_type,
            "Cost": quote.cost.to_string(),
            "CargoType": quote.cargo_type,
            "SeatsAmount": 1,
            "OptionsSeat": [{
                "weight": quote.seat.weight,
                "volumetricWidth": quote.seat.width,
                "volumetricLength": quote.seat.length,
                "volumetricHeight": quote.seat.height,
            }]
        }),
    )
}

pub fn document_delivery_date(
    date: &str,
    city_sender: &LocationIdentifier,
    city_recipient: &LocationIdentifier,
) -> CarrierRequest {
    CarrierRequest::new(
        DOCUMENT_MODEL,
        GET_DOCUMENT_DELIVERY_DATE,
        json!({
            "DateTime": date,
            "ServiceType": WAREHOUSE_WAREHOUSE,
            "CitySender": city_sender,
            "CityRecipient": city_recipient,
        }),
    )
}

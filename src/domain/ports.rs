use crate::domain::model::{CarrierRequest, CarrierResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 對外唯一的承運商 API 呼叫點
///
/// 傳輸或解析失敗以 `Err` 傳回；`success: false` 屬於正常回應。
#[async_trait]
pub trait CarrierApi: Send + Sync {
    async fn send(&self, request: &CarrierRequest) -> Result<CarrierResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn authenticate_tracking(&self) -> bool;
}

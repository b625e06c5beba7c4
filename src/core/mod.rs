pub mod client;
pub mod requests;
pub mod toolkit;
pub mod tools;
pub mod validator;

pub use crate::domain::model::{CarrierRequest, CarrierResponse, LocationIdentifier, ToolOutput};
pub use crate::domain::ports::{CarrierApi, ConfigProvider};
pub use crate::utils::error::Result;

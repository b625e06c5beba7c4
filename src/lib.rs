pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{CarrierConfig, TomlConfig};

pub use crate::core::{client::NovaPoshtaClient, toolkit::ToolKit, tools::NovaPoshtaTools};
pub use domain::arguments::{DeliveryCostRequest, DeliveryDateRequest, InvoiceRequest, PackageQuery};
pub use domain::model::{LabeledFields, LocationIdentifier, ToolOutput};
pub use utils::error::{NovaPoshtaError, Result};

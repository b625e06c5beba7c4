use crate::core::tools::NovaPoshtaTools;
use crate::domain::model::ToolOutput;
use crate::domain::ports::CarrierApi;
use crate::domain::schema::{self, CapabilitySchema};
use crate::utils::error::{NovaPoshtaError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 提供給代理框架的工具描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl From<&CapabilitySchema> for ToolDescriptor {
    fn from(schema: &CapabilitySchema) -> Self {
        Self {
            name: schema.name.to_string(),
            description: schema.description.to_string(),
            input_schema: schema.input_schema(),
        }
    }
}

pub fn list_tools() -> Vec<ToolDescriptor> {
    schema::ALL.iter().map(|schema| ToolDescriptor::from(*schema)).collect()
}

fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    // 代理有時對無參數的呼叫傳 null
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        Value::Object(map) => Value::Object(map),
        other => {
            return Err(NovaPoshtaError::InvalidArguments {
                tool: tool.to_string(),
                message: format!("expected a JSON object, got {}", other),
            })
        }
    };

    serde_json::from_value(arguments).map_err(|e| NovaPoshtaError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

/// Name-based entry point used by tool-calling frameworks.
pub struct ToolKit<A: CarrierApi> {
    tools: NovaPoshtaTools<A>,
}

impl<A: CarrierApi> ToolKit<A> {
    pub fn new(api: A) -> Self {
        Self {
            tools: NovaPoshtaTools::new(api),
        }
    }

    pub fn tools(&self) -> &NovaPoshtaTools<A> {
        &self.tools
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        list_tools()
    }

    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolOutput> {
        tracing::debug!("Dispatching tool {} with {}", name, arguments);

        match name {
            n if n == schema::INVOICE.name => {
                self.tools.create_invoice(&parse_arguments(name, arguments)?)
            }
            n if n == schema::PACKAGE.name => {
                self.tools
                    .get_package_info(&parse_arguments(name, arguments)?)
                    .await
            }
            n if n == schema::DELIVERY_COST.name => {
                self.tools
                    .calculate_delivery_cost(&parse_arguments(name, arguments)?)
                    .await
            }
            n if n == schema::DELIVERY_DATE.name => {
                self.tools
                    .estimate_delivery_date(&parse_arguments(name, arguments)?)
                    .await
            }
            _ => Err(NovaPoshtaError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }
}

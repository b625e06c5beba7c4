use crate::config::{CarrierConfig, TomlConfig};
use crate::domain::arguments::{
    DeliveryCostRequest, DeliveryDateRequest, InvoiceRequest, PackageQuery,
};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "np-tools")]
#[command(about = "Nova Poshta tools: invoices, tracking, delivery cost and date")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, global = true, env = "NOVA_POST_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "Send the API key with tracking requests too")]
    pub authenticate_tracking: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the advertised tool descriptors as JSON
    Tools,
    /// Call a tool by name with a JSON object of arguments
    Call {
        name: String,
        #[arg(default_value = "{}")]
        arguments: String,
    },
    Invoice(InvoiceArgs),
    Track(TrackArgs),
    Cost(CostArgs),
    DeliveryDate(DeliveryDateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InvoiceArgs {
    #[arg(long)]
    pub item_description: Option<String>,
    #[arg(long, default_value = "-")]
    pub sender_name: String,
    #[arg(long, default_value = "-")]
    pub receiver_name: String,
    #[arg(long)]
    pub sender_phone: Option<String>,
    #[arg(long)]
    pub receiver_phone: Option<String>,
    #[arg(long)]
    pub post_sender: Option<String>,
    #[arg(long)]
    pub post_receiver: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct TrackArgs {
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CostArgs {
    #[arg(long)]
    pub city_sender: Option<String>,
    #[arg(long)]
    pub city_recipient: Option<String>,
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long)]
    pub cost: Option<u64>,
    #[arg(long)]
    pub cargo_type: Option<String>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub length: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long, default_value = "WarehouseWarehouse")]
    pub service_type: String,
}

#[derive(Debug, Clone, Args)]
pub struct DeliveryDateArgs {
    /// dd.mm.yyyy，預設為今天
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub city_sender: Option<String>,
    #[arg(long)]
    pub city_recipient: Option<String>,
}

impl From<InvoiceArgs> for InvoiceRequest {
    fn from(args: InvoiceArgs) -> Self {
        Self {
            item_description: args.item_description,
            sender_name: args.sender_name,
            receiver_name: args.receiver_name,
            sender_phone: args.sender_phone,
            receiver_phone: args.receiver_phone,
            post_sender: args.post_sender,
            post_receiver: args.post_receiver,
        }
    }
}

impl From<TrackArgs> for PackageQuery {
    fn from(args: TrackArgs) -> Self {
        Self {
            tracking_number: args.tracking_number,
        }
    }
}

impl From<CostArgs> for DeliveryCostRequest {
    fn from(args: CostArgs) -> Self {
        Self {
            city_sender: args.city_sender,
            city_recipient: args.city_recipient,
            weight: args.weight,
            cost: args.cost,
            cargo_type: args.cargo_type,
            width: args.width,
            length: args.length,
            height: args.height,
            service_type: args.service_type,
        }
    }
}

impl From<DeliveryDateArgs> for DeliveryDateRequest {
    fn from(args: DeliveryDateArgs) -> Self {
        let date = args
            .date
            .or_else(|| Some(chrono::Local::now().format("%d.%m.%Y").to_string()));
        Self {
            date,
            city_sender: args.city_sender,
            city_recipient: args.city_recipient,
        }
    }
}

impl CliConfig {
    /// 合併設定：命令列 > TOML 檔 > 環境變數預設
    pub fn resolve(&self) -> Result<(CarrierConfig, TomlConfig)> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut carrier = file.carrier_config(CarrierConfig::from_env());
        if let Some(endpoint) = &self.endpoint {
            carrier.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &self.api_key {
            carrier.api_key = Some(api_key.clone());
        }
        if self.authenticate_tracking {
            carrier.authenticate_tracking = true;
        }

        Ok((carrier, file))
    }

    pub fn verbose(&self, file: &TomlConfig) -> bool {
        self.verbose || file.verbose()
    }

    pub fn json_logs(&self, file: &TomlConfig) -> bool {
        self.json_logs || file.json_logs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_cost_subcommand() {
        let config = CliConfig::try_parse_from([
            "np-tools",
            "--api-key",
            "k",
            "cost",
            "--city-sender",
            "Київ",
            "--city-recipient",
            "Львів",
            "--weight",
            "1.5",
        ])
        .unwrap();

        let Command::Cost(args) = config.command.clone() else {
            panic!("expected cost subcommand");
        };
        let request = DeliveryCostRequest::from(args);

        assert_eq!(request.weight, Some(1.5));
        assert_eq!(request.service_type, "WarehouseWarehouse");
        assert_eq!(request.height, None);

        let (carrier, _) = config.resolve().unwrap();
        assert_eq!(carrier.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_resolve_layers_flags_over_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[carrier]\nauthenticate_tracking = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let config =
            CliConfig::try_parse_from(["np-tools", "--config", path, "--endpoint", "http://127.0.0.1:9000/", "tools"])
                .unwrap();
        let (carrier, _) = config.resolve().unwrap();

        assert_eq!(carrier.endpoint, "http://127.0.0.1:9000/");
        assert!(carrier.authenticate_tracking);
    }

    #[test]
    fn test_invoice_names_default_to_placeholder() {
        let config = CliConfig::try_parse_from(["np-tools", "invoice", "--item-description", "Книги"]).unwrap();

        let Command::Invoice(args) = config.command else {
            panic!("expected invoice subcommand");
        };
        let request = InvoiceRequest::from(args);
        assert_eq!(request.sender_name, "-");
        assert_eq!(request.receiver_name, "-");
    }

    #[test]
    fn test_delivery_date_defaults_to_today() {
        let request = DeliveryDateRequest::from(DeliveryDateArgs {
            date: None,
            city_sender: None,
            city_recipient: None,
        });

        let date = request.date.unwrap();
        assert!(chrono::NaiveDate::parse_from_str(&date, "%d.%m.%Y").is_ok());
    }
}

use anyhow::Context;
use clap::Parser;
use nova_poshta_tools::config::cli::Command;
use nova_poshta_tools::core::toolkit::list_tools;
use nova_poshta_tools::utils::{logger, validation::Validate};
use nova_poshta_tools::{CliConfig, NovaPoshtaClient, NovaPoshtaError, ToolKit, ToolOutput};

async fn call(command: Command, kit: &ToolKit<NovaPoshtaClient>) -> Result<ToolOutput, NovaPoshtaError> {
    let tools = kit.tools();
    match command {
        Command::Call { name, arguments } => {
            let arguments: serde_json::Value =
                serde_json::from_str(&arguments).map_err(|e| NovaPoshtaError::InvalidArguments {
                    tool: name.clone(),
                    message: e.to_string(),
                })?;
            kit.call_tool(&name, arguments).await
        }
        Command::Invoice(args) => tools.create_invoice(&args.into()),
        Command::Track(args) => tools.get_package_info(&args.into()).await,
        Command::Cost(args) => tools.calculate_delivery_cost(&args.into()).await,
        Command::DeliveryDate(args) => tools.estimate_delivery_date(&args.into()).await,
        Command::Tools => Ok(ToolOutput::message(serde_json::to_string_pretty(&list_tools())?)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    let (carrier, file) = config.resolve().context("Failed to load configuration")?;

    // 初始化日誌
    if config.json_logs(&file) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose(&file));
    }

    tracing::debug!("Carrier config: {:?}", carrier);

    // 驗證配置
    if let Err(e) = carrier.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let kit = ToolKit::new(NovaPoshtaClient::new(&carrier));

    match call(config.command, &kit).await {
        Ok(ToolOutput::NoResult) => {
            tracing::info!("Carrier returned no result");
        }
        Ok(output @ ToolOutput::Fields(_)) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Tool call failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    Ok(())
}

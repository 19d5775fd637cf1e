use clap::Parser;
use serde::Serialize;
use small_stripe::config::cli::{ChargeCommand, Command, CustomerCommand, InvoiceCommand};
use small_stripe::utils::error::ErrorSeverity;
use small_stripe::utils::{logger, validation::Validate};
use small_stripe::{
    classify_network, is_luhn_valid, CliConfig, ListParams, StripeClient, StripeError, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse().with_env_fallback();

    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                // the file would have chosen the log format, so fall back to the flags
                if config.log_json {
                    logger::init_json_logger();
                } else {
                    logger::init_cli_logger(config.verbose);
                }
                fail(&e)
            }
        },
        None => None,
    };

    let verbose = config.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    let json_logs = config.log_json || file_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", config.command);

    if let Err(e) = run(&config, file_config.as_ref()).await {
        fail(&e);
    }

    Ok(())
}

async fn run(config: &CliConfig, file_config: Option<&TomlConfig>) -> small_stripe::Result<()> {
    match &config.command {
        Command::Validate { number } => {
            let network = classify_network(number);
            if is_luhn_valid(number)? {
                println!("valid ({})", network);
            } else {
                println!("invalid ({})", network);
                std::process::exit(1);
            }
            return Ok(());
        }
        Command::Classify { number } => {
            println!("{}", classify_network(number));
            return Ok(());
        }
        _ => {}
    }

    // 只有需要呼叫 API 的指令才驗證金鑰
    let client = match file_config {
        Some(file_config) => {
            file_config.validate()?;
            StripeClient::new(file_config)?
        }
        None => {
            config.validate()?;
            StripeClient::new(config)?
        }
    };
    let page_size = client.page_size();

    match &config.command {
        Command::Invoice(InvoiceCommand::Get { id }) => {
            print_json(&client.invoices().retrieve(id).await?)
        }
        Command::Invoice(InvoiceCommand::Upcoming { customer }) => {
            print_json(&client.invoices().retrieve_upcoming(customer).await?)
        }
        Command::Invoice(InvoiceCommand::List {
            customer,
            count,
            offset,
        }) => {
            let params = list_params(*count, *offset, customer.as_deref(), page_size);
            print_json(&client.invoices().list_with(&params).await?)
        }
        Command::Customer(CustomerCommand::Get { id }) => {
            print_json(&client.customers().retrieve(id).await?)
        }
        Command::Customer(CustomerCommand::List { count, offset }) => print_json(
            &client
                .customers()
                .list_n(count.unwrap_or(page_size), *offset)
                .await?,
        ),
        Command::Charge(ChargeCommand::Get { id }) => {
            print_json(&client.charges().retrieve(id).await?)
        }
        Command::Charge(ChargeCommand::List {
            customer,
            count,
            offset,
        }) => {
            let params = list_params(*count, *offset, customer.as_deref(), page_size);
            print_json(&client.charges().list_with(&params).await?)
        }
        Command::Validate { .. } | Command::Classify { .. } => Ok(()),
    }
}

fn list_params(
    count: Option<u32>,
    offset: u32,
    customer: Option<&str>,
    page_size: u32,
) -> ListParams {
    let params = ListParams::new(count.unwrap_or(page_size), offset);
    match customer {
        Some(customer) => params.for_customer(customer),
        None => params,
    }
}

fn print_json<T: Serialize>(value: &T) -> small_stripe::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(e: &StripeError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

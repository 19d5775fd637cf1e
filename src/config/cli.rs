use crate::core::ConfigProvider;
use crate::domain::params::DEFAULT_PAGE_SIZE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, Subcommand};

pub const API_KEY_ENV: &str = "STRIPE_API_KEY";

#[derive(Debug, Clone, Parser)]
#[command(name = "small-stripe")]
#[command(about = "Card checks and read-only queries against the payment API")]
pub struct CliConfig {
    /// Secret API key; falls back to $STRIPE_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, default_value = "https://api.stripe.com/v1")]
    pub api_base: String,

    #[arg(long, global = true, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// TOML config file; overrides the API flags above
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the Luhn checksum on a card number
    Validate { number: String },
    /// Guess the card network from the number prefix
    Classify { number: String },
    #[command(subcommand)]
    Invoice(InvoiceCommand),
    #[command(subcommand)]
    Customer(CustomerCommand),
    #[command(subcommand)]
    Charge(ChargeCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum InvoiceCommand {
    Get { id: String },
    Upcoming { customer: String },
    List {
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        count: Option<u32>,
        #[arg(long, default_value = "0")]
        offset: u32,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerCommand {
    Get { id: String },
    List {
        #[arg(long)]
        count: Option<u32>,
        #[arg(long, default_value = "0")]
        offset: u32,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ChargeCommand {
    Get { id: String },
    List {
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        count: Option<u32>,
        #[arg(long, default_value = "0")]
        offset: u32,
    },
}

impl CliConfig {
    /// 若未指定 --api-key，從環境變數讀取
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        self
    }

    /// Local commands never talk to the API and need no key.
    pub fn needs_api(&self) -> bool {
        !matches!(
            self.command,
            Command::Validate { .. } | Command::Classify { .. }
        )
    }
}

impl ConfigProvider for CliConfig {
    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn default_page_size(&self) -> u32 {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.needs_api() {
            return Ok(());
        }
        validate_required_field("api_key", &self.api_key)?;
        super::validate_common(self)
    }
}

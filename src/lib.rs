pub mod card;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use card::{classify_network, is_luhn_valid, CardNetwork};
pub use config::{ClientSettings, TomlConfig};
pub use crate::core::{CardClient, ChargeClient, CustomerClient, InvoiceClient, StripeClient};
pub use domain::params::{CardParams, ChargeParams, CustomerParams, ListParams};
pub use utils::error::{Result, StripeError};

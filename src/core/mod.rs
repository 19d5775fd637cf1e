pub mod cards;
pub mod charges;
pub mod client;
pub mod customers;
pub mod invoices;

pub use cards::CardClient;
pub use charges::ChargeClient;
pub use client::StripeClient;
pub use customers::CustomerClient;
pub use invoices::InvoiceClient;

pub use crate::domain::model::{Card, Charge, Customer, Invoice};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;

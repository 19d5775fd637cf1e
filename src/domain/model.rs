use crate::card::CardNetwork;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unix-seconds timestamp as sent by the API.
pub type UnixTime = DateTime<Utc>;

/// Envelope for every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
}

/// A credit card stored by the API. The full number is never returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default = "unknown_network")]
    pub card_type: CardNetwork,
    pub exp_month: u32,
    pub exp_year: u32,
    pub last4: String,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "address_line1", default)]
    pub address1: Option<String>,
    #[serde(rename = "address_line2", default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address_country: Option<String>,
    #[serde(default)]
    pub address_state: Option<String>,
    #[serde(default)]
    pub address_zip: Option<String>,
    #[serde(default)]
    pub address_line1_check: Option<String>,
    #[serde(default)]
    pub address_zip_check: Option<String>,
    #[serde(default)]
    pub cvc_check: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
}

fn unknown_network() -> CardNetwork {
    CardNetwork::Unknown
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub livemode: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: UnixTime,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub delinquent: bool,
    #[serde(default)]
    pub account_balance: i64,
    #[serde(default)]
    pub default_card: Option<String>,
    #[serde(default)]
    pub cards: Option<ListResponse<Card>>,
    #[serde(default)]
    pub discount: Option<Discount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    #[serde(default)]
    pub livemode: bool,
    pub amount: i64,
    pub currency: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: UnixTime,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub refunded: bool,
    #[serde(default)]
    pub amount_refunded: i64,
    #[serde(default)]
    pub captured: bool,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub invoice: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(default)]
    pub failure_code: Option<String>,
}

/// Statement of what a customer owes for a billing period, including
/// subscriptions, invoice items and proration adjustments.
///
/// see <https://stripe.com/docs/api#invoice_object>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub amount_due: i64,
    #[serde(default)]
    pub attempt_count: u32,
    #[serde(default)]
    pub attempted: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub paid: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub period_end: UnixTime,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub period_start: UnixTime,
    pub subtotal: i64,
    pub total: i64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
    pub customer: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: UnixTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub lines: Option<ListResponse<InvoiceLineItem>>,
    #[serde(default)]
    pub starting_balance: i64,
    #[serde(default)]
    pub ending_balance: Option<i64>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_attempt: Option<UnixTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<i64>,
    #[serde(default)]
    pub livemode: bool,
}

impl Invoice {
    pub fn line_items(&self) -> &[InvoiceLineItem] {
        self.lines.as_ref().map(|l| l.data.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: String,
    #[serde(default)]
    pub livemode: bool,
    pub amount: i64,
    pub currency: String,
    pub period: Period,
    #[serde(default)]
    pub proration: bool,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: UnixTime,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: UnixTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub interval: String,
    #[serde(default)]
    pub interval_count: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub trial_period_days: Option<u32>,
    #[serde(default)]
    pub livemode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    pub coupon: Coupon,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: UnixTime,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end: Option<UnixTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    #[serde(default)]
    pub percent_off: Option<u32>,
    #[serde(default)]
    pub amount_off: Option<i64>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub livemode: bool,
}

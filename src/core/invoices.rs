use crate::core::client::{escape, StripeClient};
use crate::domain::model::{Invoice, ListResponse};
use crate::domain::params::{FormValues, ListParams};
use crate::utils::error::Result;
use reqwest::Method;

/// Queries invoices.
pub struct InvoiceClient<'a> {
    client: &'a StripeClient,
}

impl<'a> InvoiceClient<'a> {
    pub fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// see <https://stripe.com/docs/api#retrieve_invoice>
    pub async fn retrieve(&self, id: &str) -> Result<Invoice> {
        let path = format!("/invoices/{}", escape(id));
        self.client.query(Method::GET, &path, &FormValues::new()).await
    }

    /// Upcoming invoice for the given customer.
    ///
    /// see <https://stripe.com/docs/api#retrieve_customer_invoice>
    pub async fn retrieve_upcoming(&self, customer_id: &str) -> Result<Invoice> {
        let values = vec![("customer".to_string(), customer_id.to_string())];
        self.client
            .query(Method::GET, "/invoices/upcoming", &values)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Invoice>> {
        self.list_with(&ListParams::new(self.client.page_size(), 0))
            .await
    }

    pub async fn list_n(&self, count: u32, offset: u32) -> Result<Vec<Invoice>> {
        self.list_with(&ListParams::new(count, offset)).await
    }

    pub async fn customer_list(&self, customer_id: &str) -> Result<Vec<Invoice>> {
        self.list_with(&ListParams::new(self.client.page_size(), 0).for_customer(customer_id))
            .await
    }

    pub async fn customer_list_n(
        &self,
        customer_id: &str,
        count: u32,
        offset: u32,
    ) -> Result<Vec<Invoice>> {
        self.list_with(&ListParams::new(count, offset).for_customer(customer_id))
            .await
    }

    /// see <https://stripe.com/docs/api#list_customer_invoices>
    pub async fn list_with(&self, params: &ListParams) -> Result<Vec<Invoice>> {
        let resp: ListResponse<Invoice> = self
            .client
            .query(Method::GET, "/invoices", &params.to_query())
            .await?;
        tracing::debug!("Fetched {} invoices", resp.data.len());
        Ok(resp.into_data())
    }
}

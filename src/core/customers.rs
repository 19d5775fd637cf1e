use crate::card::check_card_number;
use crate::core::client::{escape, StripeClient};
use crate::domain::model::{Customer, DeleteResponse, ListResponse};
use crate::domain::params::{CustomerParams, FormValues, ListParams};
use crate::utils::error::Result;
use reqwest::Method;

pub struct CustomerClient<'a> {
    client: &'a StripeClient,
}

impl<'a> CustomerClient<'a> {
    pub fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Creates a customer. An attached card is checksum-verified locally
    /// before anything is sent.
    pub async fn create(&self, params: &CustomerParams) -> Result<Customer> {
        if let Some(card) = &params.card {
            let network = check_card_number(&card.number)?;
            tracing::debug!("Attaching {} card to new customer", network);
        }
        self.client
            .query(Method::POST, "/customers", &params.to_form())
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Customer> {
        let path = format!("/customers/{}", escape(id));
        self.client.query(Method::GET, &path, &FormValues::new()).await
    }

    pub async fn update(&self, id: &str, params: &CustomerParams) -> Result<Customer> {
        if let Some(card) = &params.card {
            check_card_number(&card.number)?;
        }
        let path = format!("/customers/{}", escape(id));
        self.client.query(Method::POST, &path, &params.to_form()).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResponse> {
        let path = format!("/customers/{}", escape(id));
        self.client
            .query(Method::DELETE, &path, &FormValues::new())
            .await
    }

    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.list_n(self.client.page_size(), 0).await
    }

    pub async fn list_n(&self, count: u32, offset: u32) -> Result<Vec<Customer>> {
        let params = ListParams::new(count, offset);
        let resp: ListResponse<Customer> = self
            .client
            .query(Method::GET, "/customers", &params.to_query())
            .await?;
        Ok(resp.into_data())
    }
}

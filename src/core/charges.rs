use crate::card::check_card_number;
use crate::core::client::{escape, StripeClient};
use crate::domain::model::{Charge, ListResponse};
use crate::domain::params::{ChargeParams, FormValues, ListParams};
use crate::utils::error::Result;
use reqwest::Method;

pub struct ChargeClient<'a> {
    client: &'a StripeClient,
}

impl<'a> ChargeClient<'a> {
    pub fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &ChargeParams) -> Result<Charge> {
        if let Some(card) = &params.card {
            let network = check_card_number(&card.number)?;
            tracing::debug!("Charging {} {} to {} card", params.amount, params.currency, network);
        }
        self.client
            .query(Method::POST, "/charges", &params.to_form())
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Charge> {
        let path = format!("/charges/{}", escape(id));
        self.client.query(Method::GET, &path, &FormValues::new()).await
    }

    /// Refunds a charge, fully when `amount` is `None`.
    pub async fn refund(&self, id: &str, amount: Option<i64>) -> Result<Charge> {
        let path = format!("/charges/{}/refund", escape(id));
        let values: FormValues = amount
            .map(|a| vec![("amount".to_string(), a.to_string())])
            .unwrap_or_default();
        self.client.query(Method::POST, &path, &values).await
    }

    pub async fn list(&self) -> Result<Vec<Charge>> {
        self.list_with(&ListParams::new(self.client.page_size(), 0))
            .await
    }

    pub async fn list_n(&self, count: u32, offset: u32) -> Result<Vec<Charge>> {
        self.list_with(&ListParams::new(count, offset)).await
    }

    pub async fn customer_list(&self, customer_id: &str) -> Result<Vec<Charge>> {
        self.list_with(&ListParams::new(self.client.page_size(), 0).for_customer(customer_id))
            .await
    }

    pub async fn list_with(&self, params: &ListParams) -> Result<Vec<Charge>> {
        let resp: ListResponse<Charge> = self
            .client
            .query(Method::GET, "/charges", &params.to_query())
            .await?;
        Ok(resp.into_data())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientSettings;
    use crate::core::StripeClient;
    use crate::domain::params::{CardParams, ChargeParams};
    use crate::utils::error::StripeError;
    use httpmock::prelude::*;

    fn charge_json(id: &str, refunded: bool) -> serde_json::Value {
        let amount_refunded = if refunded { 1500 } else { 0 };
        serde_json::json!({
            "id": id,
            "object": "charge",
            "livemode": false,
            "amount": 1500,
            "currency": "usd",
            "created": 1_380_000_000,
            "paid": true,
            "refunded": refunded,
            "amount_refunded": amount_refunded,
            "captured": true,
            "card": {
                "id": "card_1",
                "last4": "4444",
                "type": "MasterCard",
                "exp_month": 6,
                "exp_year": 2029
            }
        })
    }

    fn client_for(server: &MockServer) -> StripeClient {
        StripeClient::new(&ClientSettings::new("sk_test_123").with_api_base(server.base_url()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_charge_with_card() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/charges")
                .x_www_form_urlencoded_tuple("amount", "1500")
                .x_www_form_urlencoded_tuple("currency", "usd")
                .x_www_form_urlencoded_tuple("card[number]", "5555555555554444");
            then.status(200).json_body(charge_json("ch_1", false));
        });

        let params = ChargeParams::new(1500, "usd")
            .with_card(CardParams::new("5555555555554444", 6, 2029).with_cvc("123"));
        let charge = client_for(&server).charges().create(&params).await.unwrap();

        api_mock.assert();
        assert!(charge.paid);
        assert_eq!(
            charge.card.unwrap().card_type,
            crate::card::CardNetwork::MasterCard
        );
    }

    #[tokio::test]
    async fn test_create_charge_rejects_malformed_card_locally() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/charges");
            then.status(200).json_body(charge_json("ch_1", false));
        });

        let params = ChargeParams::new(1500, "usd")
            .with_card(CardParams::new("5555-5555-5555-4444", 6, 2029));
        let result = client_for(&server).charges().create(&params).await;

        assert!(matches!(
            result,
            Err(StripeError::NonNumericCardNumber { position: 4, .. })
        ));
        assert_eq!(api_mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_partial_refund() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/charges/ch_1/refund")
                .x_www_form_urlencoded_tuple("amount", "500");
            then.status(200).json_body(charge_json("ch_1", true));
        });

        let charge = client_for(&server)
            .charges()
            .refund("ch_1", Some(500))
            .await
            .unwrap();

        api_mock.assert();
        assert!(charge.refunded);
    }

    #[tokio::test]
    async fn test_declined_charge_surfaces_api_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/charges");
            then.status(402).json_body(serde_json::json!({
                "error": {
                    "type": "card_error",
                    "message": "Your card was declined.",
                    "code": "card_declined"
                }
            }));
        });

        let params = ChargeParams::new(1500, "usd").for_customer("cus_1");
        let result = client_for(&server).charges().create(&params).await;

        api_mock.assert();
        match result {
            Err(StripeError::ApiError { status, code, .. }) => {
                assert_eq!(status, 402);
                assert_eq!(code.as_deref(), Some("card_declined"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retrieve_charge() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/charges/ch_1");
            then.status(200).json_body(charge_json("ch_1", false));
        });

        let charge = client_for(&server).charges().retrieve("ch_1").await.unwrap();

        api_mock.assert();
        assert_eq!(charge.id, "ch_1");
        assert_eq!(charge.amount, 1500);
        assert!(!charge.refunded);
    }

    #[tokio::test]
    async fn test_list_charges_uses_default_range() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/charges")
                .query_param("count", "10")
                .query_param("offset", "0");
            then.status(200).json_body(serde_json::json!({
                "object": "list",
                "data": [charge_json("ch_1", false), charge_json("ch_2", true)]
            }));
        });

        let charges = client_for(&server).charges().list().await.unwrap();

        api_mock.assert();
        assert_eq!(charges.len(), 2);
        assert!(charges[1].refunded);
    }

    #[tokio::test]
    async fn test_customer_list_filters_by_customer() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/charges")
                .query_param("count", "10")
                .query_param("offset", "0")
                .query_param("customer", "cus_3");
            then.status(200).json_body(serde_json::json!({
                "object": "list",
                "data": [charge_json("ch_3", false)]
            }));
        });

        let charges = client_for(&server)
            .charges()
            .customer_list("cus_3")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].id, "ch_3");
    }
}

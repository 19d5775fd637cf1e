use crate::card::check_card_number;
use crate::core::client::{escape, StripeClient};
use crate::domain::model::{Card, DeleteResponse, ListResponse};
use crate::domain::params::{CardParams, FormValues};
use crate::utils::error::Result;
use reqwest::Method;

/// Manages the cards stored on a customer.
pub struct CardClient<'a> {
    client: &'a StripeClient,
}

impl<'a> CardClient<'a> {
    pub fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Adds a card to the customer.
    ///
    /// The number is run through the Luhn check first; a malformed or
    /// mistyped number fails here and is never sent to the API.
    pub async fn create(&self, customer_id: &str, params: &CardParams) -> Result<Card> {
        let network = check_card_number(&params.number)?;
        tracing::debug!("Adding {} card to customer {}", network, customer_id);

        let mut values = FormValues::new();
        params.append_form(&mut values);
        self.client
            .query(Method::POST, &cards_path(customer_id), &values)
            .await
    }

    pub async fn retrieve(&self, customer_id: &str, id: &str) -> Result<Card> {
        let path = format!("{}/{}", cards_path(customer_id), escape(id));
        self.client.query(Method::GET, &path, &FormValues::new()).await
    }

    /// Updates expiry, name or address. The number itself cannot change.
    pub async fn update(&self, customer_id: &str, id: &str, params: &CardParams) -> Result<Card> {
        let path = format!("{}/{}", cards_path(customer_id), escape(id));
        self.client
            .query(Method::POST, &path, &params.update_form())
            .await
    }

    pub async fn delete(&self, customer_id: &str, id: &str) -> Result<DeleteResponse> {
        let path = format!("{}/{}", cards_path(customer_id), escape(id));
        self.client
            .query(Method::DELETE, &path, &FormValues::new())
            .await
    }

    pub async fn list(&self, customer_id: &str) -> Result<Vec<Card>> {
        let resp: ListResponse<Card> = self
            .client
            .query(Method::GET, &cards_path(customer_id), &FormValues::new())
            .await?;
        Ok(resp.into_data())
    }
}

fn cards_path(customer_id: &str) -> String {
    format!("/customers/{}/cards", escape(customer_id))
}

#[cfg(test)]
mod tests {
    use crate::card::CardNetwork;
    use crate::config::ClientSettings;
    use crate::core::StripeClient;
    use crate::domain::params::CardParams;
    use crate::utils::error::StripeError;
    use httpmock::prelude::*;

    fn card_json(id: &str, network: &str, last4: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "object": "card",
            "last4": last4,
            "type": network,
            "exp_month": 12,
            "exp_year": 2030,
            "customer": "cus_1",
            "cvc_check": "pass"
        })
    }

    fn client_for(server: &MockServer) -> StripeClient {
        StripeClient::new(&ClientSettings::new("sk_test_123").with_api_base(server.base_url()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_card_sends_card_fields() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/customers/cus_1/cards")
                .x_www_form_urlencoded_tuple("card[number]", "378282246310005")
                .x_www_form_urlencoded_tuple("card[exp_month]", "12")
                .x_www_form_urlencoded_tuple("card[exp_year]", "2030");
            then.status(200)
                .json_body(card_json("card_1", "American Express", "0005"));
        });

        let params = CardParams::new("378282246310005", 12, 2030);
        let card = client_for(&server)
            .cards()
            .create("cus_1", &params)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(card.card_type, CardNetwork::AmericanExpress);
        assert_eq!(card.last4, "0005");
    }

    #[tokio::test]
    async fn test_create_card_with_bad_checksum_is_rejected_locally() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/customers/cus_1/cards");
            then.status(200).json_body(card_json("card_1", "Visa", "4241"));
        });

        let params = CardParams::new("4242424242424241", 12, 2030);
        let result = client_for(&server).cards().create("cus_1", &params).await;

        match result {
            Err(StripeError::InvalidCard { network, .. }) => assert_eq!(network, "Visa"),
            other => panic!("expected InvalidCard, got {:?}", other),
        }
        assert_eq!(api_mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_update_card_sends_plain_fields() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/customers/cus_1/cards/card_1")
                .x_www_form_urlencoded_tuple("exp_year", "2032")
                .x_www_form_urlencoded_tuple("name", "Jane Roe");
            then.status(200).json_body(card_json("card_1", "Visa", "4242"));
        });

        let params = CardParams {
            exp_year: 2032,
            name: Some("Jane Roe".to_string()),
            ..Default::default()
        };
        let card = client_for(&server)
            .cards()
            .update("cus_1", "card_1", &params)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(card.id, "card_1");
    }

    #[tokio::test]
    async fn test_list_cards() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/customers/cus_1/cards");
            then.status(200).json_body(serde_json::json!({
                "object": "list",
                "count": 2,
                "data": [
                    card_json("card_1", "Visa", "4242"),
                    card_json("card_2", "Discover", "0004")
                ]
            }));
        });

        let cards = client_for(&server).cards().list("cus_1").await.unwrap();

        api_mock.assert();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].card_type, CardNetwork::Discover);
    }

    #[tokio::test]
    async fn test_delete_card() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(DELETE).path("/customers/cus_1/cards/card_1");
            then.status(200)
                .json_body(serde_json::json!({"id": "card_1", "deleted": true}));
        });

        let resp = client_for(&server)
            .cards()
            .delete("cus_1", "card_1")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(resp.id, "card_1");
        assert!(resp.deleted);
    }

    #[tokio::test]
    async fn test_retrieve_card() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/customers/cus_1/cards/card_1");
            then.status(200)
                .json_body(card_json("card_1", "Discover", "1117"));
        });

        let card = client_for(&server)
            .cards()
            .retrieve("cus_1", "card_1")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(card.card_type, CardNetwork::Discover);
        assert_eq!(card.customer.as_deref(), Some("cus_1"));
    }
}

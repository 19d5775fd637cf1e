use crate::card::{classify_network, CardNetwork};

/// Ordered key/value pairs, sent as a query string or form body.
pub type FormValues = Vec<(String, String)>;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Options for creating or updating credit cards.
#[derive(Debug, Clone, Default)]
pub struct CardParams {
    /// (Optional) Cardholder's full name.
    pub name: Option<String>,

    /// The card number, as a string without any separators.
    pub number: String,

    pub exp_month: u32,
    pub exp_year: u32,

    /// Card security code
    pub cvc: Option<String>,

    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address_country: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
}

impl CardParams {
    pub fn new(number: impl Into<String>, exp_month: u32, exp_year: u32) -> Self {
        Self {
            number: number.into(),
            exp_month,
            exp_year,
            ..Default::default()
        }
    }

    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address_zip(mut self, zip: impl Into<String>) -> Self {
        self.address_zip = Some(zip.into());
        self
    }

    pub fn network(&self) -> CardNetwork {
        classify_network(&self.number)
    }

    /// Encodes the card as `card[...]` form fields. An empty number is left
    /// out so that updates can touch only the other fields.
    pub fn append_form(&self, values: &mut FormValues) {
        if !self.number.is_empty() {
            push(values, "card[number]", &self.number);
        }
        if self.exp_month != 0 {
            push(values, "card[exp_month]", &self.exp_month.to_string());
        }
        if self.exp_year != 0 {
            push(values, "card[exp_year]", &self.exp_year.to_string());
        }
        push_opt(values, "card[cvc]", &self.cvc);
        push_opt(values, "card[name]", &self.name);
        push_opt(values, "card[address_line1]", &self.address1);
        push_opt(values, "card[address_line2]", &self.address2);
        push_opt(values, "card[address_country]", &self.address_country);
        push_opt(values, "card[address_state]", &self.address_state);
        push_opt(values, "card[address_zip]", &self.address_zip);
    }

    /// Update form for an existing card: the number cannot change, so only
    /// the plain (unprefixed) attributes are sent.
    pub fn update_form(&self) -> FormValues {
        let mut values = FormValues::new();
        if self.exp_month != 0 {
            push(&mut values, "exp_month", &self.exp_month.to_string());
        }
        if self.exp_year != 0 {
            push(&mut values, "exp_year", &self.exp_year.to_string());
        }
        push_opt(&mut values, "name", &self.name);
        push_opt(&mut values, "address_line1", &self.address1);
        push_opt(&mut values, "address_line2", &self.address2);
        push_opt(&mut values, "address_country", &self.address_country);
        push_opt(&mut values, "address_state", &self.address_state);
        push_opt(&mut values, "address_zip", &self.address_zip);
        values
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerParams {
    pub email: Option<String>,
    pub description: Option<String>,
    pub coupon: Option<String>,
    pub plan: Option<String>,
    pub card: Option<CardParams>,
}

impl CustomerParams {
    pub fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        push_opt(&mut values, "email", &self.email);
        push_opt(&mut values, "description", &self.description);
        push_opt(&mut values, "coupon", &self.coupon);
        push_opt(&mut values, "plan", &self.plan);
        if let Some(card) = &self.card {
            card.append_form(&mut values);
        }
        values
    }
}

/// A charge is billed either to a stored customer or to a one-off card.
#[derive(Debug, Clone)]
pub struct ChargeParams {
    /// Amount in the smallest currency unit (cents).
    pub amount: i64,
    pub currency: String,
    pub customer: Option<String>,
    pub card: Option<CardParams>,
    pub description: Option<String>,
}

impl ChargeParams {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer: None,
            card: None,
            description: None,
        }
    }

    pub fn for_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer = Some(customer_id.into());
        self
    }

    pub fn with_card(mut self, card: CardParams) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to_form(&self) -> FormValues {
        let mut values = FormValues::new();
        push(&mut values, "amount", &self.amount.to_string());
        push(&mut values, "currency", &self.currency);
        push_opt(&mut values, "customer", &self.customer);
        push_opt(&mut values, "description", &self.description);
        if let Some(card) = &self.card {
            card.append_form(&mut values);
        }
        values
    }
}

/// Range selection for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub count: u32,
    pub offset: u32,
    pub customer: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_PAGE_SIZE,
            offset: 0,
            customer: None,
        }
    }
}

impl ListParams {
    pub fn new(count: u32, offset: u32) -> Self {
        Self {
            count,
            offset,
            customer: None,
        }
    }

    pub fn for_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer = Some(customer_id.into());
        self
    }

    pub fn to_query(&self) -> FormValues {
        let mut values = vec![
            ("count".to_string(), self.count.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];
        // 只有指定客戶時才過濾
        if let Some(customer) = self.customer.as_deref().filter(|c| !c.is_empty()) {
            push(&mut values, "customer", customer);
        }
        values
    }
}

fn push(values: &mut FormValues, key: &str, value: &str) {
    values.push((key.to_string(), value.to_string()));
}

fn push_opt(values: &mut FormValues, key: &str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        push(values, key, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(values: &'a FormValues, key: &str) -> Option<&'a str> {
        values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_card_form_uses_card_prefix_and_skips_empty_fields() {
        let card = CardParams::new("4242424242424242", 12, 2030)
            .with_cvc("123")
            .with_address_zip("");
        let mut values = FormValues::new();
        card.append_form(&mut values);

        assert_eq!(lookup(&values, "card[number]"), Some("4242424242424242"));
        assert_eq!(lookup(&values, "card[exp_month]"), Some("12"));
        assert_eq!(lookup(&values, "card[exp_year]"), Some("2030"));
        assert_eq!(lookup(&values, "card[cvc]"), Some("123"));
        assert_eq!(lookup(&values, "card[address_zip]"), None);
        assert_eq!(lookup(&values, "card[name]"), None);
        assert_eq!(card.network(), CardNetwork::Visa);
    }

    #[test]
    fn test_card_update_form_never_sends_number() {
        let card = CardParams::new("4242424242424242", 1, 2031).with_name("Jane Roe");
        let values = card.update_form();

        assert_eq!(lookup(&values, "name"), Some("Jane Roe"));
        assert_eq!(lookup(&values, "exp_year"), Some("2031"));
        assert!(values.iter().all(|(k, _)| !k.contains("number")));
    }

    #[test]
    fn test_list_params_default_range() {
        let values = ListParams::default().to_query();
        assert_eq!(
            values,
            vec![
                ("count".to_string(), "10".to_string()),
                ("offset".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_params_with_customer() {
        let values = ListParams::new(25, 50).for_customer("cus_123").to_query();
        assert_eq!(lookup(&values, "count"), Some("25"));
        assert_eq!(lookup(&values, "offset"), Some("50"));
        assert_eq!(lookup(&values, "customer"), Some("cus_123"));

        let blank = ListParams::default().for_customer("").to_query();
        assert_eq!(lookup(&blank, "customer"), None);
    }

    #[test]
    fn test_charge_form_includes_card_fields() {
        let params = ChargeParams::new(1500, "usd")
            .with_card(CardParams::new("5105105105105100", 6, 2029))
            .with_description("order 7");
        let values = params.to_form();

        assert_eq!(lookup(&values, "amount"), Some("1500"));
        assert_eq!(lookup(&values, "currency"), Some("usd"));
        assert_eq!(lookup(&values, "description"), Some("order 7"));
        assert_eq!(lookup(&values, "card[number]"), Some("5105105105105100"));
        assert_eq!(lookup(&values, "customer"), None);
    }
}

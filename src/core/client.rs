use crate::core::{CardClient, ChargeClient, CustomerClient, InvoiceClient};
use crate::domain::params::FormValues;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StripeError};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Thin async wrapper over the REST API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct StripeClient {
    http: Client,
    api_key: String,
    api_base: String,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
    code: Option<String>,
    param: Option<String>,
}

impl StripeClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_non_empty_string("api_key", config.api_key())?;
        validate_url("api_base", config.api_base())?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key().to_string(),
            api_base: config.api_base().trim_end_matches('/').to_string(),
            page_size: config.default_page_size(),
        })
    }

    pub fn invoices(&self) -> InvoiceClient<'_> {
        InvoiceClient::new(self)
    }

    pub fn customers(&self) -> CustomerClient<'_> {
        CustomerClient::new(self)
    }

    pub fn charges(&self) -> ChargeClient<'_> {
        ChargeClient::new(self)
    }

    pub fn cards(&self) -> CardClient<'_> {
        CardClient::new(self)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// 發送請求並將 JSON 回應解析為 `T`
    ///
    /// GET/DELETE 參數放在 query string，POST 參數以表單編碼放在 body。
    pub async fn query<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        values: &FormValues,
    ) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        tracing::debug!("Making API request: {} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.api_key, None::<&str>);

        if !values.is_empty() {
            request = if method == Method::POST {
                request.form(values)
            } else {
                request.query(values)
            };
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let err = decode_api_error(status.as_u16(), &body);
        tracing::warn!("API request {} {} failed: {}", method, path, err);
        Err(err)
    }
}

fn decode_api_error(status: u16, body: &str) -> StripeError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => StripeError::ApiError {
            status,
            error_type: envelope.error.error_type,
            message: envelope
                .error
                .message
                .unwrap_or_else(|| "no message".to_string()),
            code: envelope.error.code,
            param: envelope.error.param,
        },
        Err(_) => StripeError::ApiError {
            status,
            error_type: None,
            message: body.trim().to_string(),
            code: None,
            param: None,
        },
    }
}

/// Characters that may not appear raw inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes an ID for use as a single path segment.
pub(crate) fn escape(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Settings every configuration source must provide to build a client.
pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn api_base(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn default_page_size(&self) -> u32;
}

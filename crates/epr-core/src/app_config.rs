#[derive(Clone)]
pub struct AppConfig {
    pub mvm_api_bearer_token: String,
    pub mvm_api_base_url: String,
    /// Custom-field id holding the French EPR (Triman) registration number.
    pub fr_epr_reg_number_custom_field_id: u64,
    /// Custom-field id holding the German LUCID packaging registration number.
    pub de_lucid_reg_number_custom_field_id: u64,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub inter_request_delay_ms: u64,
    pub page_size: u32,
    pub max_pages: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mvm_api_bearer_token", &"[redacted]")
            .field("mvm_api_base_url", &self.mvm_api_base_url)
            .field(
                "fr_epr_reg_number_custom_field_id",
                &self.fr_epr_reg_number_custom_field_id,
            )
            .field(
                "de_lucid_reg_number_custom_field_id",
                &self.de_lucid_reg_number_custom_field_id,
            )
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooEnvelope<YahooChartResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooEnvelope<YahooQuoteSummaryResult>,
}

/// Shared `{ "result": [...], "error": {...} }` wrapper of the v8/v10 endpoints.
#[derive(Debug, Deserialize)]
pub struct YahooEnvelope<T> {
    pub result: Option<Vec<T>>,
    pub error: Option<YahooApiError>,
}

#[derive(Debug, Deserialize)]
pub struct YahooApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl YahooApiError {
    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some("Not Found")
    }

    pub fn message(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{}: {}", code, description),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => String::from("unknown error"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    #[serde(default)]
    pub meta: Option<YahooChartMeta>,
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: Option<YahooChartIndicators>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub exchange_name: Option<String>,
    #[serde(default)]
    pub full_exchange_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartIndicators {
    #[serde(default)]
    pub quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    #[serde(default)]
    pub asset_profile: Option<YahooAssetProfile>,
    #[serde(default)]
    pub price: Option<YahooPrice>,
}

#[derive(Debug, Deserialize)]
pub struct YahooAssetProfile {
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPrice {
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange_name: Option<String>,
}

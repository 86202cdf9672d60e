use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::DateTime;
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use tracing::{debug, warn};

use super::{
    provider::MarketDataProvider,
    utils::{RawResponse, make_request, non_empty, parse_response_object},
    yahoo_dto::{YahooChartResponse, YahooQuoteSummaryResponse},
};
use crate::{
    config::Config,
    error::FetchError,
    models::{InstrumentMetadata, LookbackPeriod, PriceHistory, PricePoint, TickerSymbol},
};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const SUMMARY_MODULES: &str = "assetProfile,price";

#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
    base_url: String,
    cookie_url: String,
    timeout: Duration,
    crumb: Arc<Mutex<Option<String>>>,
}

impl YahooApi {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(*config.timeout())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            cookie_url: config.cookie_url().clone(),
            timeout: *config.timeout(),
            crumb: Arc::new(Mutex::new(None)),
        })
    }

    fn cached_crumb(&self) -> Option<String> {
        self.crumb.lock().ok().and_then(|guard| guard.clone())
    }

    fn store_crumb(&self, crumb: Option<String>) {
        if let Ok(mut guard) = self.crumb.lock() {
            *guard = crumb;
        }
    }

    /// quoteSummary needs a session cookie and the crumb bound to it.
    async fn get_crumb(&self) -> Result<String, FetchError> {
        if let Some(crumb) = self.cached_crumb() {
            return Ok(crumb);
        }

        // The cookie endpoint usually answers 404; only the Set-Cookie matters.
        make_request(&self.client, &self.cookie_url, self.timeout).await?;

        let url = format!("{}/v1/test/getcrumb", self.base_url);
        let res = make_request(&self.client, &url, self.timeout).await?;
        if !res.is_success() {
            return Err(res.status_error());
        }

        let crumb = res.body.trim();
        if crumb.is_empty()
            || crumb.len() >= 100
            || crumb.contains(' ')
            || crumb.contains('<')
        {
            return Err(FetchError::Provider(String::from(
                "failed to obtain a session crumb",
            )));
        }

        debug!("Obtained Yahoo crumb");
        self.store_crumb(Some(crumb.to_string()));
        Ok(crumb.to_string())
    }
}

impl MarketDataProvider for YahooApi {
    async fn price_history(
        &self,
        symbol: &TickerSymbol,
        period: LookbackPeriod,
    ) -> Result<(PriceHistory, InstrumentMetadata), FetchError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            period.to_str()
        );
        let res = make_request(&self.client, &url, self.timeout).await?;
        parse_chart(&res)
    }

    async fn metadata(&self, symbol: &TickerSymbol) -> Result<InstrumentMetadata, FetchError> {
        let crumb = self.get_crumb().await?;
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            SUMMARY_MODULES,
            urlencoding::encode(&crumb)
        );
        let res = make_request(&self.client, &url, self.timeout).await?;

        if res.status == 401 || res.status == 403 {
            warn!("Yahoo rejected the session crumb, it will be refreshed on the next lookup");
            self.store_crumb(None);
        }

        parse_quote_summary(&res)
    }
}

pub fn parse_chart(res: &RawResponse) -> Result<(PriceHistory, InstrumentMetadata), FetchError> {
    let data = parse_response_object::<YahooChartResponse>(res)?;

    if let Some(error) = data.chart.error {
        if error.is_not_found() {
            return Ok((PriceHistory::default(), InstrumentMetadata::default()));
        }
        return Err(FetchError::Provider(error.message()));
    }

    if !res.is_success() {
        return Err(res.status_error());
    }

    let Some(result) = data.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok((PriceHistory::default(), InstrumentMetadata::default()));
    };

    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .and_then(|i| i.quote.into_iter().next())
        .map(|q| q.close)
        .unwrap_or_default();

    let points = timestamps
        .into_iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            let close = close.filter(|c| c.is_finite())?;
            let date = DateTime::from_timestamp(ts, 0)?;
            let close = Decimal::from_f64(close)?.round_dp(4);
            Some(PricePoint::new(date, close))
        })
        .collect();

    let metadata = match result.meta {
        Some(meta) => InstrumentMetadata::new(
            non_empty(meta.long_name).or(non_empty(meta.short_name)),
            None,
            non_empty(meta.currency),
            non_empty(meta.full_exchange_name).or(non_empty(meta.exchange_name)),
        ),
        None => InstrumentMetadata::default(),
    };

    Ok((PriceHistory::new(points), metadata))
}

pub fn parse_quote_summary(res: &RawResponse) -> Result<InstrumentMetadata, FetchError> {
    let data = parse_response_object::<YahooQuoteSummaryResponse>(res)?;

    if let Some(error) = data.quote_summary.error {
        return Err(FetchError::Provider(error.message()));
    }

    if !res.is_success() {
        return Err(res.status_error());
    }

    let Some(result) = data.quote_summary.result.and_then(|r| r.into_iter().next()) else {
        return Ok(InstrumentMetadata::default());
    };

    let sector = result.asset_profile.and_then(|p| non_empty(p.sector));

    let metadata = match result.price {
        Some(price) => InstrumentMetadata::new(
            non_empty(price.long_name).or(non_empty(price.short_name)),
            sector,
            non_empty(price.currency),
            non_empty(price.exchange_name),
        ),
        None => InstrumentMetadata::new(None, sector, None, None),
    };

    Ok(metadata)
}

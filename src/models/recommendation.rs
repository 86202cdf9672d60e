use derive_getters::Getters;

const QUOTE_PAGE_URL: &str = "https://quote.eastmoney.com";

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Recommendation {
    symbol: String,
    link: String,
}

impl Recommendation {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            link: format!("{}/{}.html", QUOTE_PAGE_URL, symbol),
        }
    }
}

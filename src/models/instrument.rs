use derive_getters::Getters;
use derive_new::new;

/// Descriptive fields for a symbol. The provider may leave any of them out.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct InstrumentMetadata {
    name: Option<String>,
    sector: Option<String>,
    currency: Option<String>,
    exchange: Option<String>,
}

impl InstrumentMetadata {
    /// Fills fields missing here from `other`.
    pub fn or(self, other: InstrumentMetadata) -> Self {
        Self {
            name: self.name.or(other.name),
            sector: self.sector.or(other.sector),
            currency: self.currency.or(other.currency),
            exchange: self.exchange.or(other.exchange),
        }
    }

    pub fn currency_sign(&self) -> &str {
        match self.currency.as_deref() {
            Some("CNY") | Some("JPY") => "¥",
            Some("USD") | Some("HKD") => "$",
            Some("EUR") => "€",
            Some("GBP") => "£",
            Some(other) => other,
            None => "",
        }
    }
}

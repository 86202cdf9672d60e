pub mod instrument;
pub mod period;
pub mod price_point;
pub mod recommendation;
pub mod snapshot;
pub mod ticker;

pub use instrument::InstrumentMetadata;
pub use period::LookbackPeriod;
pub use price_point::{PriceHistory, PricePoint};
pub use recommendation::Recommendation;
pub use snapshot::Snapshot;
pub use ticker::TickerSymbol;

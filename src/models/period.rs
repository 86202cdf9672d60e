use std::fmt;

use clap::ValueEnum;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, PartialEq, ValueEnum)]
pub enum LookbackPeriod {
    #[value(name = "5d")]
    FiveDays,
    #[default]
    #[value(name = "1mo")]
    OneMonth,
    #[value(name = "3mo")]
    ThreeMonths,
    #[value(name = "6mo")]
    SixMonths,
    #[value(name = "1y")]
    OneYear,
}

impl LookbackPeriod {
    /// Range string understood by the chart endpoint.
    pub fn to_str(&self) -> &str {
        match self {
            LookbackPeriod::FiveDays => "5d",
            LookbackPeriod::OneMonth => "1mo",
            LookbackPeriod::ThreeMonths => "3mo",
            LookbackPeriod::SixMonths => "6mo",
            LookbackPeriod::OneYear => "1y",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LookbackPeriod::FiveDays => "5 days",
            LookbackPeriod::OneMonth => "1 month",
            LookbackPeriod::ThreeMonths => "3 months",
            LookbackPeriod::SixMonths => "6 months",
            LookbackPeriod::OneYear => "1 year",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            LookbackPeriod::FiveDays => LookbackPeriod::OneMonth,
            LookbackPeriod::OneMonth => LookbackPeriod::ThreeMonths,
            LookbackPeriod::ThreeMonths => LookbackPeriod::SixMonths,
            LookbackPeriod::SixMonths => LookbackPeriod::OneYear,
            LookbackPeriod::OneYear => LookbackPeriod::FiveDays,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            LookbackPeriod::FiveDays => LookbackPeriod::OneYear,
            LookbackPeriod::OneMonth => LookbackPeriod::FiveDays,
            LookbackPeriod::ThreeMonths => LookbackPeriod::OneMonth,
            LookbackPeriod::SixMonths => LookbackPeriod::ThreeMonths,
            LookbackPeriod::OneYear => LookbackPeriod::SixMonths,
        }
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

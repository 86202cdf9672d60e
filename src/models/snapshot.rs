use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq, new)]
pub struct Snapshot {
    price: Decimal,
    previous_close: Decimal,
    change: Decimal,
    change_percent: Decimal,
}

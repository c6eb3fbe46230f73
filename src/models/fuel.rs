use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct FuelEntry {
    pub date: NaiveDate,
    pub litres: Decimal,
    pub price: Decimal,
    pub place: String,
}

impl FuelEntry {
    pub fn new(date: NaiveDate, litres: Decimal, price: Decimal, place: impl Into<String>) -> Self {
        Self {
            date,
            litres,
            price,
            place: place.into(),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.litres.to_string(),
            self.price.to_string(),
            self.place.clone(),
        ]
    }
}

//! Wire format of the persisted inventory: a JSON array of product records
//! with calendar dates rendered as `YYYY-MM-DD`.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    batch_id: String,
    quantity: u32,
    #[serde(with = "calendar_date")]
    mfg_date: NaiveDate,
    #[serde(with = "calendar_date")]
    exp_date: NaiveDate,
}

impl ProductRecord {
    fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            batch_id: product.batch_id.clone(),
            quantity: product.quantity,
            mfg_date: product.mfg_date,
            exp_date: product.exp_date,
        }
    }

    fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.batch_id,
            self.quantity,
            self.mfg_date,
            self.exp_date,
        )
    }
}

/// Parses a stored date.
///
/// Accepts plain `YYYY-MM-DD` and full RFC 3339 timestamps. Browser clients
/// wrote local midnight as a UTC instant (`...Z`), so a timestamp is read back
/// as the calendar date it falls on in the local timezone, the same one
/// [`SystemClock`](crate::domain::clock::SystemClock) uses for "today".
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    parse_calendar_date_in(raw, &Local)
}

/// [`parse_calendar_date`] with timestamps resolved in `tz`.
pub fn parse_calendar_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(tz).date_naive())
    })
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_calendar_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid calendar date: {}", raw)))
    }
}

pub fn serialize_products(products: &[Product]) -> Result<String, RepositoryError> {
    let records: Vec<ProductRecord> = products.iter().map(ProductRecord::from_domain).collect();
    serde_json::to_string(&records).map_err(|_| RepositoryError::CorruptData)
}

pub fn deserialize_products(raw: &str) -> Result<Vec<Product>, RepositoryError> {
    let records: Vec<ProductRecord> =
        serde_json::from_str(raw).map_err(|_| RepositoryError::CorruptData)?;
    Ok(records.into_iter().map(ProductRecord::into_domain).collect())
}

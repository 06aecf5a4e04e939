use chrono::NaiveDate;

/// Products expiring within this many days (today included) are near expiry.
pub const NEAR_EXPIRY_THRESHOLD_DAYS: i64 = 7;

/// Freshness of a product relative to a reference date.
///
/// Always derived from the expiry date, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    Valid,
    NearExpiry,
    Expired,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Valid => write!(f, "Valid"),
            ProductStatus::NearExpiry => write!(f, "Near Expiry"),
            ProductStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Whole calendar days from `today` to `exp_date`.
///
/// Returns 0 for products expiring today, negative for expired products.
pub fn days_until_expiry(exp_date: NaiveDate, today: NaiveDate) -> i64 {
    (exp_date - today).num_days()
}

/// Classifies a product by its expiry date using the default threshold.
///
/// Business rules:
/// - Expiry day already elapsed -> Expired
/// - Expires today up to 7 days out -> NearExpiry
/// - Anything later -> Valid
pub fn classify(exp_date: NaiveDate, today: NaiveDate) -> ProductStatus {
    classify_with_threshold(exp_date, today, NEAR_EXPIRY_THRESHOLD_DAYS)
}

/// Same as [`classify`] with a caller-chosen near-expiry threshold.
pub fn classify_with_threshold(
    exp_date: NaiveDate,
    today: NaiveDate,
    threshold_days: i64,
) -> ProductStatus {
    if exp_date < today {
        return ProductStatus::Expired;
    }

    if days_until_expiry(exp_date, today) <= threshold_days {
        return ProductStatus::NearExpiry;
    }

    ProductStatus::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_classify_reference_scenario() {
        let today = date(2024, 6, 10);

        assert_eq!(classify(date(2024, 6, 9), today), ProductStatus::Expired);
        assert_eq!(classify(date(2024, 6, 10), today), ProductStatus::NearExpiry);
        assert_eq!(classify(date(2024, 6, 17), today), ProductStatus::NearExpiry);
        assert_eq!(classify(date(2024, 6, 18), today), ProductStatus::Valid);
    }

    #[test]
    fn should_not_mark_product_expiring_today_as_expired() {
        let today = date(2024, 2, 29);
        assert_eq!(classify(today, today), ProductStatus::NearExpiry);
    }

    #[test]
    fn should_count_days_across_month_and_year_boundaries() {
        assert_eq!(days_until_expiry(date(2025, 1, 2), date(2024, 12, 30)), 3);
        assert_eq!(days_until_expiry(date(2024, 3, 1), date(2024, 2, 28)), 2);
        assert_eq!(days_until_expiry(date(2024, 6, 8), date(2024, 6, 10)), -2);
    }

    #[test]
    fn should_honor_custom_threshold() {
        let today = date(2024, 6, 10);

        assert_eq!(
            classify_with_threshold(date(2024, 6, 13), today, 3),
            ProductStatus::NearExpiry
        );
        assert_eq!(
            classify_with_threshold(date(2024, 6, 14), today, 3),
            ProductStatus::Valid
        );
        assert_eq!(
            classify_with_threshold(today, today, 0),
            ProductStatus::NearExpiry
        );
    }

    #[test]
    fn should_display_status_labels() {
        assert_eq!(ProductStatus::Valid.to_string(), "Valid");
        assert_eq!(ProductStatus::NearExpiry.to_string(), "Near Expiry");
        assert_eq!(ProductStatus::Expired.to_string(), "Expired");
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (-50_000i64..50_000).prop_map(|offset| date(2000, 1, 1) + Duration::days(offset))
    }

    proptest! {
        #[test]
        fn past_dates_are_expired(today in any_date(), back in 1i64..10_000) {
            prop_assert_eq!(classify(today - Duration::days(back), today), ProductStatus::Expired);
        }

        #[test]
        fn dates_within_threshold_are_near_expiry(today in any_date(), ahead in 0i64..=NEAR_EXPIRY_THRESHOLD_DAYS) {
            prop_assert_eq!(classify(today + Duration::days(ahead), today), ProductStatus::NearExpiry);
        }

        #[test]
        fn dates_beyond_threshold_are_valid(today in any_date(), ahead in (NEAR_EXPIRY_THRESHOLD_DAYS + 1)..10_000) {
            prop_assert_eq!(classify(today + Duration::days(ahead), today), ProductStatus::Valid);
        }
    }
}

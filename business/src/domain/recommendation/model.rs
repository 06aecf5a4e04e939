use chrono::NaiveDate;

use crate::domain::inventory::codec::format_calendar_date;
use crate::domain::product::model::Product;

/// Everything the recommendation service is told about a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub product_name: String,
    pub expiry_date: NaiveDate,
    pub current_date: NaiveDate,
    pub quantity: u32,
}

impl RecommendationRequest {
    pub fn for_product(product: &Product, current_date: NaiveDate) -> Self {
        Self {
            product_name: product.name.clone(),
            expiry_date: product.exp_date,
            current_date,
            quantity: product.quantity,
        }
    }

    pub fn expiry_date_string(&self) -> String {
        format_calendar_date(self.expiry_date)
    }

    pub fn current_date_string(&self) -> String {
        format_calendar_date(self.current_date)
    }
}

/// Dispositions the service is steered towards. Not enforced: the service
/// may answer with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispositionAction {
    ApplyDiscount,
    MarkForDonation,
    RemoveStock,
}

impl DispositionAction {
    pub const ALL: [DispositionAction; 3] = [
        DispositionAction::ApplyDiscount,
        DispositionAction::MarkForDonation,
        DispositionAction::RemoveStock,
    ];
}

impl std::fmt::Display for DispositionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispositionAction::ApplyDiscount => write!(f, "apply discount"),
            DispositionAction::MarkForDonation => write!(f, "mark for donation"),
            DispositionAction::RemoveStock => write!(f, "remove stock"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub suggested_action: String,
    pub reason: String,
}

impl Recommendation {
    /// Maps the free-text action onto a known disposition, if it names one.
    pub fn known_action(&self) -> Option<DispositionAction> {
        let action = self.suggested_action.to_lowercase();
        if action.contains("discount") {
            Some(DispositionAction::ApplyDiscount)
        } else if action.contains("donat") {
            Some(DispositionAction::MarkForDonation)
        } else if action.contains("remove") {
            Some(DispositionAction::RemoveStock)
        } else {
            None
        }
    }
}

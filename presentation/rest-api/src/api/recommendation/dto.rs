use poem_openapi::{Enum, Object};

use business::domain::recommendation::model::{DispositionAction, Recommendation};

#[derive(Debug, Clone, Copy, Enum)]
pub enum DispositionActionDto {
    #[oai(rename = "apply_discount")]
    ApplyDiscount,
    #[oai(rename = "mark_for_donation")]
    MarkForDonation,
    #[oai(rename = "remove_stock")]
    RemoveStock,
}

impl From<DispositionAction> for DispositionActionDto {
    fn from(action: DispositionAction) -> Self {
        match action {
            DispositionAction::ApplyDiscount => DispositionActionDto::ApplyDiscount,
            DispositionAction::MarkForDonation => DispositionActionDto::MarkForDonation,
            DispositionAction::RemoveStock => DispositionActionDto::RemoveStock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecommendationResponse {
    /// Action suggested by the assistant, as written
    pub suggested_action: String,
    /// Short justification for the action
    pub reason: String,
    /// The suggested action matched to a known disposition, when it names one
    pub known_action: Option<DispositionActionDto>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        let known_action = recommendation.known_action().map(Into::into);
        Self {
            suggested_action: recommendation.suggested_action,
            reason: recommendation.reason,
            known_action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_known_action_when_recognised() {
        let response: RecommendationResponse = Recommendation {
            suggested_action: "Apply discount".to_string(),
            reason: "Expires in 2 days".to_string(),
        }
        .into();

        assert!(matches!(
            response.known_action,
            Some(DispositionActionDto::ApplyDiscount)
        ));
        assert_eq!(response.suggested_action, "Apply discount");
    }

    #[test]
    fn should_leave_known_action_empty_for_free_text() {
        let response: RecommendationResponse = Recommendation {
            suggested_action: "Use in staff meals".to_string(),
            reason: "Small quantity".to_string(),
        }
        .into();

        assert!(response.known_action.is_none());
    }
}

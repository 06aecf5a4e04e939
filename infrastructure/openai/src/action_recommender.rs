use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::model::{
    DispositionAction, Recommendation, RecommendationRequest,
};
use business::domain::recommendation::services::RecommendationService;

use crate::client::{OpenAIClient, find_json_object};

const SYSTEM_PROMPT: &str = r#"You are an inventory management expert in a supermarket.
Based on a product's expiry date, the current date, and the quantity in stock, suggest one action that minimizes losses and reduces waste.
Return ONLY a JSON object with these fields:
- "suggestedAction": the action to take
- "reason": a brief explanation of the suggestion"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationFields {
    suggested_action: String,
    reason: String,
}

pub struct ActionRecommenderOpenAI {
    client: OpenAIClient,
}

impl ActionRecommenderOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_prompt(request: &RecommendationRequest) -> String {
        let actions = DispositionAction::ALL
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Product Name: {}\nExpiry Date: {}\nCurrent Date: {}\nQuantity: {}\n\nConsider these actions: {}.",
            request.product_name,
            request.expiry_date_string(),
            request.current_date_string(),
            request.quantity,
            actions
        )
    }

    fn parse_response(content: &str) -> Result<Recommendation, RecommendationError> {
        let json_str = find_json_object(content).ok_or_else(|| {
            RecommendationError::GenerationFailed("no JSON object in response".to_string())
        })?;

        let fields: RecommendationFields = serde_json::from_str(json_str).map_err(|e| {
            RecommendationError::GenerationFailed(format!("malformed recommendation: {}", e))
        })?;

        if fields.suggested_action.trim().is_empty() {
            return Err(RecommendationError::GenerationFailed(
                "empty suggested action".to_string(),
            ));
        }

        Ok(Recommendation {
            suggested_action: fields.suggested_action.trim().to_string(),
            reason: fields.reason.trim().to_string(),
        })
    }
}

#[async_trait]
impl RecommendationService for ActionRecommenderOpenAI {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, RecommendationError> {
        let body = json!({
            "model": self.client.model,
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_prompt(request)},
            ],
            "temperature": 0.3,
        });

        let text = self
            .client
            .create_response(&body)
            .await
            .map_err(RecommendationError::GenerationFailed)?;

        Self::parse_response(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_render_request_fields_in_prompt() {
        let request = RecommendationRequest {
            product_name: "Sourdough".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            current_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            quantity: 40,
        };

        let prompt = ActionRecommenderOpenAI::build_prompt(&request);

        assert!(prompt.contains("Product Name: Sourdough"));
        assert!(prompt.contains("Expiry Date: 2024-06-12"));
        assert!(prompt.contains("Current Date: 2024-06-10"));
        assert!(prompt.contains("Quantity: 40"));
        assert!(prompt.contains("apply discount, mark for donation, remove stock"));
    }

    #[test]
    fn should_parse_recommendation() {
        let content = "```json\n{\"suggestedAction\":\"mark for donation\",\"reason\":\"Two days left and high stock.\"}\n```";

        let recommendation = ActionRecommenderOpenAI::parse_response(content).unwrap();

        assert_eq!(recommendation.suggested_action, "mark for donation");
        assert_eq!(
            recommendation.known_action(),
            Some(DispositionAction::MarkForDonation)
        );
    }

    #[test]
    fn should_fail_on_empty_action() {
        let content = r#"{"suggestedAction":"  ","reason":"none"}"#;
        assert!(matches!(
            ActionRecommenderOpenAI::parse_response(content),
            Err(RecommendationError::GenerationFailed(_))
        ));
    }
}

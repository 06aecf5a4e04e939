use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::product::errors::ProductError;
use business::domain::product::services::{ExtractedProductInfo, ProductExtractorService};
use business::domain::product::value_objects::LabelImage;

use crate::client::{OpenAIClient, find_json_object};

const SYSTEM_PROMPT: &str = r#"You are an expert OCR system for a perishable goods inventory.
Extract the product name, batch ID, manufacturing date, and expiry date from the product label in the image.
Return ONLY a JSON object with these fields:
- "productName": the name of the product
- "batchId": the batch or lot number printed on the label
- "mfgDate": the manufacturing date in YYYY-MM-DD format
- "expDate": the expiry date in YYYY-MM-DD format

Example output:
{"productName":"Whole Milk","batchId":"L2406-17","mfgDate":"2024-06-01","expDate":"2024-06-12"}"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelFields {
    product_name: String,
    batch_id: String,
    mfg_date: String,
    exp_date: String,
}

pub struct LabelExtractorOpenAI {
    client: OpenAIClient,
}

impl LabelExtractorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn parse_response(content: &str) -> Result<ExtractedProductInfo, ProductError> {
        let json_str = find_json_object(content).ok_or_else(|| {
            ProductError::ExtractionFailed("no JSON object in response".to_string())
        })?;

        let fields: LabelFields = serde_json::from_str(json_str)
            .map_err(|e| ProductError::ExtractionFailed(format!("malformed fields: {}", e)))?;

        Ok(ExtractedProductInfo {
            product_name: fields.product_name.trim().to_string(),
            batch_id: fields.batch_id.trim().to_string(),
            mfg_date: fields.mfg_date.trim().to_string(),
            exp_date: fields.exp_date.trim().to_string(),
        })
    }
}

#[async_trait]
impl ProductExtractorService for LabelExtractorOpenAI {
    async fn extract(&self, image: &LabelImage) -> Result<ExtractedProductInfo, ProductError> {
        let body = json!({
            "model": self.client.model,
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "input_image",
                            "image_url": image.to_data_uri(),
                            "detail": "high",
                        },
                        {
                            "type": "input_text",
                            "text": "Extract the product details from this label.",
                        },
                    ],
                },
            ],
            "temperature": 0.1,
        });

        let text = self
            .client
            .create_response(&body)
            .await
            .map_err(ProductError::ExtractionFailed)?;

        Self::parse_response(&text)
    }
}

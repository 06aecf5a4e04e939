use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the responses endpoint URL.
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Sends one request to the responses endpoint and returns the model's
    /// text output. Errors carry a short reason suitable for the caller.
    pub async fn create_response(&self, body: &Value) -> Result<String, String> {
        let response = self
            .client
            .post(self.responses_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("service responded with {}", response.status()));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| format!("unreadable response: {}", e))?;

        output_text(&data)
            .map(str::to_string)
            .ok_or_else(|| "response had no text output".to_string())
    }
}

/// Pulls the first `output_text` block out of a responses-API payload.
pub fn output_text(data: &Value) -> Option<&str> {
    data["output"]
        .as_array()
        .and_then(|outputs| outputs.iter().find(|o| o["type"] == "message"))
        .and_then(|msg| msg["content"].as_array())
        .and_then(|contents| contents.iter().find(|c| c["type"] == "output_text"))
        .and_then(|c| c["text"].as_str())
}

/// Finds the outermost JSON object in free text, tolerating markdown fences
/// and chatter around it.
pub fn find_json_object(content: &str) -> Option<&str> {
    regex::Regex::new(r"\{[\s\S]*\}")
        .ok()
        .and_then(|re| re.find(content))
        .map(|m| m.as_str())
}

//! Insight service: turn an app event into a short uplifting reminder

use serde_json::Value;
use shared::{insight_prompt, InsightOutput};
use std::sync::Arc;

use crate::error::AppResult;
use crate::external::TextGenerationProvider;

#[derive(Clone)]
pub struct InsightService {
    provider: Arc<dyn TextGenerationProvider>,
}

impl InsightService {
    pub fn new(provider: Arc<dyn TextGenerationProvider>) -> Self {
        Self { provider }
    }

    /// Generate an insight for `event`. Output that is not a JSON object is
    /// wrapped in the default envelope instead of failing.
    pub async fn generate(&self, event: &Value) -> AppResult<InsightOutput> {
        let prompt = insight_prompt(event);
        let generated = self.provider.generate(&prompt).await?;

        let output = InsightOutput::decode(&generated);
        if !output.is_structured() {
            tracing::debug!("Insight reply was plain text, wrapping in default envelope");
        }

        Ok(output)
    }
}

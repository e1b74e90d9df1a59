use async_trait::async_trait;

use crate::error::EstimatorError;
use crate::types::{ScenarioProjection, ScenarioRequest};

#[async_trait]
pub trait ScenarioEstimator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn estimate(
        &self,
        request: ScenarioRequest,
    ) -> Result<ScenarioProjection, EstimatorError>;
}

use std::sync::Arc;

use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::providers::{LocalScenarioEstimator, RemoteScenarioEstimator};
use crate::traits::ScenarioEstimator;

pub fn build_estimator(
    cfg: EstimatorConfig,
) -> Result<Arc<dyn ScenarioEstimator>, EstimatorError> {
    match cfg {
        EstimatorConfig::Local => Ok(Arc::new(LocalScenarioEstimator::new())),
        EstimatorConfig::Remote(c) => Ok(Arc::new(RemoteScenarioEstimator::new(c)?)),
    }
}

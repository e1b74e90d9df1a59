use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RemoteEstimatorConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteEstimatorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EstimatorConfig {
    /// In-process projection with the built-in coefficients.
    Local,
    /// Delegate projection to an external scoring service.
    Remote(RemoteEstimatorConfig),
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::Local
    }
}

mod local;
mod remote;

pub use local::LocalScenarioEstimator;
pub use remote::RemoteScenarioEstimator;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flightdeck_core::{PlaneLevel, ReaoScores, Responses};

/// A scored assessment as persisted. Everything derived at submit time
/// is stored alongside the raw input so history reads need no rescoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentRecord {
    pub id: String,
    pub responses: Responses,
    pub tech_tools: Vec<String>,
    /// Question average, 0-100.
    pub assessment_score: f64,
    /// Tech stack score, 0-10.
    pub tech_score: f64,
    /// Blended score, 0-10.
    pub combined_score: f64,
    pub reao_scores: ReaoScores,
    pub plane_level: PlaneLevel,
    pub flight_miles: i64,
    pub insights: Vec<String>,
    pub timestamp_ms: u64,
}

/// The scored fields of a submission, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub responses: Responses,
    pub tech_tools: Vec<String>,
    pub assessment_score: f64,
    pub tech_score: f64,
    pub combined_score: f64,
    pub reao_scores: ReaoScores,
    pub plane_level: PlaneLevel,
    pub flight_miles: i64,
    pub insights: Vec<String>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Persisted {
    assessments: Vec<AssessmentRecord>,
}

/// JSON-file backed assessment store. Every mutation rewrites the file,
/// which is plenty for the handful of records a deployment holds.
pub struct AssessmentStore {
    path: PathBuf,
    assessments: Vec<AssessmentRecord>,
    next_id: u64,
}

impl AssessmentStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !path.exists() {
            let persisted = Persisted::default();
            let bytes = serde_json::to_vec_pretty(&persisted)?;
            fs::write(&path, bytes)?;
        }

        let bytes = fs::read(&path)?;
        let persisted: Persisted = serde_json::from_slice(&bytes)?;
        let next_id = persisted
            .assessments
            .iter()
            .filter_map(|a| a.id.strip_prefix("asmt-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Ok(Self {
            path,
            assessments: persisted.assessments,
            next_id,
        })
    }

    pub fn insert(&mut self, new: NewAssessment) -> Result<AssessmentRecord, StorageError> {
        if new.responses.is_empty() && new.tech_tools.is_empty() {
            return Err(StorageError::InvalidInput(
                "assessment has no responses and no tools".to_string(),
            ));
        }

        let record = AssessmentRecord {
            id: format!("asmt-{}", self.next_id),
            responses: new.responses,
            tech_tools: new.tech_tools,
            assessment_score: new.assessment_score,
            tech_score: new.tech_score,
            combined_score: new.combined_score,
            reao_scores: new.reao_scores,
            plane_level: new.plane_level,
            flight_miles: new.flight_miles,
            insights: new.insights,
            timestamp_ms: now_ms(),
        };

        self.next_id += 1;
        self.assessments.push(record.clone());
        self.persist()?;

        Ok(record)
    }

    pub fn get(&self, id: &str) -> Option<&AssessmentRecord> {
        self.assessments.iter().find(|a| a.id == id)
    }

    /// Newest first.
    pub fn history(&self, limit: usize) -> Vec<AssessmentRecord> {
        let n = limit.max(1);
        self.assessments.iter().rev().take(n).cloned().collect()
    }

    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.assessments.len();
        self.assessments.retain(|a| a.id != id);
        let changed = self.assessments.len() != before;
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    pub fn stats(&self) -> serde_json::Value {
        serde_json::json!({
            "count": self.assessments.len(),
            "path": self.path,
        })
    }

    fn persist(&self) -> Result<(), StorageError> {
        let persisted = Persisted {
            assessments: self.assessments.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&persisted)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

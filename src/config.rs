//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::model::{PropositionId, RelationType};
use crate::{Error, Result};

/// Which relation tags the value type check accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationSet {
    /// `T`, `P`, `B`.
    Minimal,
    /// `PR`, `T`, `P`, `B`, `X`.
    #[default]
    Extended,
}

impl RelationSet {
    pub fn tags(self) -> &'static [RelationType] {
        match self {
            RelationSet::Minimal => &[RelationType::OnTopic, RelationType::Parallel, RelationType::Break],
            RelationSet::Extended => &RelationType::ALL,
        }
    }

    pub fn contains(self, relation: RelationType) -> bool {
        self.tags().contains(&relation)
    }
}

/// Knobs shared by validator, layout, edges and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtaConfig {
    /// Identifier the root row must carry.
    pub root_sentinel: PropositionId,
    /// Responding rows at this distance never get a connecting edge.
    pub break_distance: f64,
    pub relation_set: RelationSet,
    /// Decimal places for the mean metrics.
    pub precision: u32,
}

impl Default for DtaConfig {
    fn default() -> Self {
        Self {
            root_sentinel: PropositionId::Num(0),
            break_distance: 4.0,
            relation_set: RelationSet::Extended,
            precision: 3,
        }
    }
}

impl DtaConfig {
    pub fn with_root_sentinel(mut self, id: impl Into<PropositionId>) -> Self {
        self.root_sentinel = id.into();
        self
    }

    pub fn with_break_distance(mut self, distance: f64) -> Self {
        self.break_distance = distance;
        self
    }

    pub fn with_relation_set(mut self, set: RelationSet) -> Self {
        self.relation_set = set;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Parse from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.break_distance.is_finite() || self.break_distance < 0.0 {
            return Err(Error::Config(format!(
                "break_distance must be a non-negative number, got {}",
                self.break_distance
            )));
        }
        if self.precision > 12 {
            return Err(Error::Config(format!("precision must be at most 12, got {}", self.precision)));
        }
        Ok(())
    }

    /// Round to `precision` decimals, ties to even.
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round_ties_even() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DtaConfig::default();
        assert_eq!(config.root_sentinel, PropositionId::Num(0));
        assert_eq!(config.break_distance, 4.0);
        assert_eq!(config.precision, 3);
        assert!(config.relation_set.contains(RelationType::Flexible));
        assert!(!RelationSet::Minimal.contains(RelationType::Prompt));
    }

    #[test]
    fn test_from_json_partial() {
        let config = DtaConfig::from_json_str(r#"{"precision": 2, "relation_set": "minimal"}"#).unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.relation_set, RelationSet::Minimal);
        assert_eq!(config.break_distance, 4.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(DtaConfig::from_json_str(r#"{"precision": 40}"#), Err(Error::Config(_))));
        assert!(DtaConfig::default().with_break_distance(-1.0).validate().is_err());
        assert!(DtaConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_round() {
        let config = DtaConfig::default();
        assert_eq!(config.round(2.0 / 3.0), 0.667);
        assert_eq!(config.round(0.0625), 0.062);
        assert_eq!(config.with_precision(1).round(0.25), 0.2);
    }
}

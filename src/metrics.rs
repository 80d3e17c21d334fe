//! Semantic distance metrics — pure reductions over layout x-coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DtaConfig;
use crate::layout::Layout;
use crate::model::{Dataset, RelationType};
use crate::{Error, Result};

/// The three scalar summaries shown next to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemanticMetrics {
    /// Largest x over all nodes.
    pub accumulated_semantic_distance: f64,
    /// Mean x over all nodes, rounded.
    pub mean_semantic_distance: f64,
    /// Mean x over `P` rows, rounded.
    #[serde(rename = "mean_semantic_distance_only_for_P")]
    pub mean_semantic_distance_only_for_p: f64,
}

impl SemanticMetrics {
    /// Compute all three. Fails with [`Error::Domain`] when any of them is
    /// undefined, in particular when no row is coded `P`.
    pub fn compute(dataset: &Dataset, layout: &Layout, config: &DtaConfig) -> Result<Self> {
        Ok(Self {
            accumulated_semantic_distance: accumulated(layout)?,
            mean_semantic_distance: mean(layout, config)?,
            mean_semantic_distance_only_for_p: mean_for(dataset, layout, RelationType::Parallel, config)?,
        })
    }
}

/// `max(x)` over all nodes.
pub fn accumulated(layout: &Layout) -> Result<f64> {
    layout
        .nodes()
        .iter()
        .map(|n| n.x)
        .reduce(f64::max)
        .ok_or_else(|| Error::Domain("accumulated semantic distance of an empty layout".into()))
}

/// `round(mean(x))` over all nodes.
pub fn mean(layout: &Layout, config: &DtaConfig) -> Result<f64> {
    let xs: Vec<f64> = layout.nodes().iter().map(|n| n.x).collect();
    average(&xs)
        .map(|m| config.round(m))
        .ok_or_else(|| Error::Domain("mean semantic distance of an empty layout".into()))
}

/// `round(mean(x))` over the rows coded `relation`.
pub fn mean_for(dataset: &Dataset, layout: &Layout, relation: RelationType, config: &DtaConfig) -> Result<f64> {
    let xs: Vec<f64> = dataset
        .iter()
        .enumerate()
        .filter(|(_, r)| r.relation_type == Some(relation))
        .filter_map(|(row, _)| layout.position(row).map(|p| p.x))
        .collect();
    average(&xs)
        .map(|m| config.round(m))
        .ok_or_else(|| Error::Domain(format!("mean semantic distance for {relation}: no {relation} rows")))
}

fn average(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

/// Integral values keep one decimal, like the numbers shown to coders.
pub(crate) fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

impl fmt::Display for SemanticMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean Semantic Distance (all): {}", format_number(self.mean_semantic_distance))?;
        writeln!(f, "Accumulated Semantic Distance: {}", format_number(self.accumulated_semantic_distance))?;
        write!(f, "Mean Semantic Distance (P): {}", format_number(self.mean_semantic_distance_only_for_p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::model::{PropositionId, Record};

    fn record(id: i64, responds_to: Option<i64>, relation: RelationType, distance: f64) -> Record {
        Record {
            row: 0,
            proposition: PropositionId::Num(id),
            speaker: Some("A".into()),
            responds_to: responds_to.map(PropositionId::Num),
            relation_type: Some(relation),
            distance: Some(distance),
            line_type: None,
            text: None,
        }
    }

    #[test]
    fn test_three_metrics() {
        let dataset = Dataset::new(vec![
            record(0, None, RelationType::Prompt, 0.0),
            record(1, Some(0), RelationType::OnTopic, 0.0),
            record(2, Some(1), RelationType::Parallel, 2.0),
            record(3, Some(2), RelationType::Parallel, 3.0),
        ]);
        let layout = layout::compute(&dataset).unwrap();
        let metrics = SemanticMetrics::compute(&dataset, &layout, &DtaConfig::default()).unwrap();
        assert_eq!(metrics.accumulated_semantic_distance, 5.0);
        assert_eq!(metrics.mean_semantic_distance, 1.75);
        assert_eq!(metrics.mean_semantic_distance_only_for_p, 3.5);
    }

    #[test]
    fn test_no_parallel_rows_is_domain_error() {
        let dataset = Dataset::new(vec![
            record(0, None, RelationType::Prompt, 0.0),
            record(1, Some(0), RelationType::OnTopic, 0.0),
        ]);
        let layout = layout::compute(&dataset).unwrap();
        let config = DtaConfig::default();
        assert!(matches!(SemanticMetrics::compute(&dataset, &layout, &config), Err(Error::Domain(_))));
        // the defined subset is still available
        assert_eq!(accumulated(&layout).unwrap(), 0.0);
        assert_eq!(mean(&layout, &config).unwrap(), 0.0);
    }

    #[test]
    fn test_display() {
        let metrics = SemanticMetrics {
            accumulated_semantic_distance: 2.0,
            mean_semantic_distance: 0.667,
            mean_semantic_distance_only_for_p: 2.0,
        };
        assert_eq!(
            metrics.to_string(),
            "Mean Semantic Distance (all): 0.667\nAccumulated Semantic Distance: 2.0\nMean Semantic Distance (P): 2.0"
        );
    }
}

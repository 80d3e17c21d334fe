//! Rendering hand-off.
//!
//! Everything a chart layer needs, and nothing about how it looks: marker
//! coordinates grouped by relation type, the three edge traces, and per-row
//! annotations.

use serde::{Deserialize, Serialize};

use crate::edges::{EdgeSet, EdgeTrace};
use crate::layout::Layout;
use crate::model::{Dataset, LineType, Position, RelationType};

/// Options for [`PlotData::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Attach speaker/text annotations to every point.
    pub show_text: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { show_text: true }
    }
}

/// Points of one relation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGroup {
    pub relation: RelationType,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl MarkerGroup {
    fn new(relation: RelationType) -> Self {
        Self { relation, name: relation.legend_name().to_owned(), x: Vec::new(), y: Vec::new() }
    }

    fn push(&mut self, p: Position) {
        self.x.push(p.x);
        self.y.push(p.y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// One edge trace with its legend name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTrace {
    pub line_type: LineType,
    pub name: String,
    #[serde(flatten)]
    pub trace: EdgeTrace,
}

/// Hover/label text anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub speaker: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub root: Position,
    /// T, P, B, X, then PR. The PR group starts with the root point.
    pub markers: Vec<MarkerGroup>,
    /// solid ("responds to"), dotted ("may respond to"), no line.
    pub edges: Vec<NamedTrace>,
    pub annotations: Vec<Annotation>,
}

impl PlotData {
    pub fn build(dataset: &Dataset, layout: &Layout, edges: &EdgeSet, options: &PlotOptions) -> Self {
        let positions = layout.positions();
        let root = positions.first().copied().unwrap_or(Position::new(0.0, 0.0));

        let mut markers: Vec<MarkerGroup> = RelationType::ALL.iter().map(|&r| MarkerGroup::new(r)).collect();
        if let Some(prompt) = markers.iter_mut().find(|g| g.relation == RelationType::Prompt) {
            prompt.push(root);
        }
        for (record, &pos) in dataset.iter().zip(positions).skip(1) {
            let Some(relation) = record.relation_type else { continue };
            if let Some(group) = markers.iter_mut().find(|g| g.relation == relation) {
                group.push(pos);
            }
        }

        let edges = [
            (LineType::Solid, "responds to"),
            (LineType::Dotted, "may respond to"),
            (LineType::NoLine, "no line"),
        ]
        .into_iter()
        .map(|(line_type, name)| NamedTrace {
            line_type,
            name: name.to_owned(),
            trace: edges.trace(line_type).clone(),
        })
        .collect();

        let annotations = if options.show_text {
            dataset
                .iter()
                .zip(positions)
                .map(|(record, pos)| Annotation {
                    x: pos.x,
                    y: pos.y,
                    speaker: record.speaker.clone(),
                    text: record.text.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self { root, markers, edges, annotations }
    }

    pub fn markers_for(&self, relation: RelationType) -> Option<&MarkerGroup> {
        self.markers.iter().find(|g| g.relation == relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DtaConfig;
    use crate::model::{PropositionId, Record};
    use crate::{edges, layout};

    fn record(id: i64, responds_to: Option<i64>, relation: Option<RelationType>, distance: f64) -> Record {
        Record {
            row: 0,
            proposition: PropositionId::Num(id),
            speaker: Some(format!("S{id}")),
            responds_to: responds_to.map(PropositionId::Num),
            relation_type: relation,
            distance: Some(distance),
            line_type: Some(LineType::Solid),
            text: Some(format!("t{id}")),
        }
    }

    fn build(options: PlotOptions) -> PlotData {
        let dataset = Dataset::new(vec![
            record(0, None, None, 0.0),
            record(1, Some(0), Some(RelationType::OnTopic), 0.0),
            record(2, Some(1), Some(RelationType::Parallel), 1.0),
            record(3, Some(2), Some(RelationType::Prompt), 0.0),
            record(4, Some(0), Some(RelationType::Break), 4.0),
        ]);
        let layout = layout::compute(&dataset).unwrap();
        let edges = edges::classify(&dataset, &layout, &DtaConfig::default()).unwrap();
        PlotData::build(&dataset, &layout, &edges, &options)
    }

    #[test]
    fn test_marker_groups() {
        let plot = build(PlotOptions::default());
        assert_eq!(plot.root, Position::new(0.0, 5.0));
        let order: Vec<RelationType> = plot.markers.iter().map(|g| g.relation).collect();
        assert_eq!(order, RelationType::ALL.to_vec());
        let prompt = plot.markers_for(RelationType::Prompt).unwrap();
        assert_eq!(prompt.x, vec![0.0, 1.0]);
        assert_eq!(prompt.y, vec![5.0, 2.0]);
        assert_eq!(plot.markers_for(RelationType::Break).unwrap().x, vec![4.0]);
        assert!(plot.markers_for(RelationType::Flexible).unwrap().is_empty());
    }

    #[test]
    fn test_edge_traces_named() {
        let plot = build(PlotOptions::default());
        let names: Vec<&str> = plot.edges.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["responds to", "may respond to", "no line"]);
        // three solid edges; the break row has none
        assert_eq!(plot.edges[0].trace.segment_count(), 3);
    }

    #[test]
    fn test_annotations_toggle() {
        let shown = build(PlotOptions::default());
        assert_eq!(shown.annotations.len(), 5);
        assert_eq!(shown.annotations[2].speaker.as_deref(), Some("S2"));
        assert_eq!(shown.annotations[2].text.as_deref(), Some("t2"));
        assert!(build(PlotOptions { show_text: false }).annotations.is_empty());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical diagram types the pipeline can produce. Each drives a fixed
/// prompt/extractor/fallback triple in the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Flowchart,
    Mindmap,
    Gantt,
    Pie,
    Quadrant,
    Journey,
    Git,
    State,
    Class,
    Timeline,
    Sequence,
}

impl ChartType {
    /// Resolve a user-supplied tag to a canonical type. Aliases are accepted
    /// case-insensitively; anything unrecognized maps to a mindmap, which can
    /// represent arbitrary topic input.
    pub fn resolve(tag: &str) -> ChartType {
        match tag.trim().to_ascii_lowercase().as_str() {
            "gantt" | "project" => ChartType::Gantt,
            "pie" | "statistics" | "distribution" => ChartType::Pie,
            "quadrant" | "matrix" | "analysis" => ChartType::Quadrant,
            "journey" | "user-journey" | "customer-journey" => ChartType::Journey,
            "git" | "gitgraph" | "version-control" => ChartType::Git,
            "state" | "state-diagram" | "status" => ChartType::State,
            "class" | "class-diagram" | "entity" => ChartType::Class,
            "flowchart" | "flow" | "process" => ChartType::Flowchart,
            "mindmap" | "mind" | "structure" | "topic" => ChartType::Mindmap,
            "timeline" | "time" => ChartType::Timeline,
            "sequence" | "interaction" => ChartType::Sequence,
            _ => ChartType::Mindmap,
        }
    }

    /// The leading token a document of this type must carry. Extraction
    /// anchors on it; fallbacks are built around it. Timelines are emitted in
    /// the flowchart document shape, so they anchor on `flowchart`.
    pub fn keyword(self) -> &'static str {
        match self {
            ChartType::Flowchart | ChartType::Timeline => "flowchart",
            ChartType::Mindmap => "mindmap",
            ChartType::Gantt => "gantt",
            ChartType::Pie => "pie",
            ChartType::Quadrant => "quadrantChart",
            ChartType::Journey => "journey",
            ChartType::Git => "gitgraph",
            ChartType::State => "stateDiagram",
            ChartType::Class => "classDiagram",
            ChartType::Sequence => "sequenceDiagram",
        }
    }

    /// Every canonical type, for exhaustive iteration in callers and tests.
    pub fn all() -> &'static [ChartType] {
        &[
            ChartType::Flowchart,
            ChartType::Mindmap,
            ChartType::Gantt,
            ChartType::Pie,
            ChartType::Quadrant,
            ChartType::Journey,
            ChartType::Git,
            ChartType::State,
            ChartType::Class,
            ChartType::Timeline,
            ChartType::Sequence,
        ]
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ChartType::Flowchart => "flowchart",
            ChartType::Mindmap => "mindmap",
            ChartType::Gantt => "gantt",
            ChartType::Pie => "pie",
            ChartType::Quadrant => "quadrant",
            ChartType::Journey => "journey",
            ChartType::Git => "git",
            ChartType::State => "state",
            ChartType::Class => "class",
            ChartType::Timeline => "timeline",
            ChartType::Sequence => "sequence",
        };
        f.write_str(tag)
    }
}

/// A generation request: the user's text plus an optional pinned chart type
/// (any alias). When no type is pinned the classifier picks one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub input: String,
    #[serde(default)]
    pub chart_type: Option<String>,
}

/// The response envelope. `mermaid_code` is always non-empty and starts with
/// the resolved type's keyword; `raw_response` carries the unmodified
/// completion for audit when one was received.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub success: bool,
    pub chart_type: ChartType,
    pub mermaid_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_aliases_to_canonical_types() {
        assert_eq!(ChartType::resolve("project"), ChartType::Gantt);
        assert_eq!(ChartType::resolve("distribution"), ChartType::Pie);
        assert_eq!(ChartType::resolve("matrix"), ChartType::Quadrant);
        assert_eq!(ChartType::resolve("customer-journey"), ChartType::Journey);
        assert_eq!(ChartType::resolve("version-control"), ChartType::Git);
        assert_eq!(ChartType::resolve("status"), ChartType::State);
        assert_eq!(ChartType::resolve("entity"), ChartType::Class);
        assert_eq!(ChartType::resolve("process"), ChartType::Flowchart);
        assert_eq!(ChartType::resolve("topic"), ChartType::Mindmap);
        assert_eq!(ChartType::resolve("structure"), ChartType::Mindmap);
        assert_eq!(ChartType::resolve("time"), ChartType::Timeline);
        assert_eq!(ChartType::resolve("interaction"), ChartType::Sequence);
    }

    #[test]
    fn resolve_is_case_insensitive_and_trims() {
        assert_eq!(ChartType::resolve("  GitGraph "), ChartType::Git);
        assert_eq!(ChartType::resolve("PROCESS"), ChartType::Flowchart);
    }

    #[test]
    fn resolve_defaults_unknown_tags_to_mindmap() {
        assert_eq!(ChartType::resolve("hologram"), ChartType::Mindmap);
        assert_eq!(ChartType::resolve(""), ChartType::Mindmap);
    }

    #[test]
    fn timeline_anchors_on_the_flowchart_keyword() {
        assert_eq!(ChartType::Timeline.keyword(), "flowchart");
    }

    #[test]
    fn response_envelope_serializes_camel_case() {
        let response = ChartResponse {
            success: true,
            chart_type: ChartType::Gantt,
            mermaid_code: "gantt\n    title X".to_string(),
            raw_response: Some("raw".to_string()),
            fallback: false,
            error: None,
        };
        let value = serde_json::to_value(&response).expect("serializable");
        assert_eq!(value["chartType"], "gantt");
        assert!(value["mermaidCode"].as_str().unwrap().starts_with("gantt"));
        assert_eq!(value["rawResponse"], "raw");
        assert_eq!(value["fallback"], false);
        assert!(value.get("error").is_none(), "None fields are omitted");
    }
}

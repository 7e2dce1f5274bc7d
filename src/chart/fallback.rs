use super::classify::{InputKind, detect_input_kind};
use super::types::ChartType;

const UNIVERSAL_EXCERPT_MAX: usize = 50;
const MINDMAP_EXCERPT_MAX: usize = 40;

/// Deterministic, always-valid document for when extraction fails or the
/// upstream service does. The template is fixed per type; the user's input
/// only ever appears as a short excerpt.
pub fn fallback(chart: ChartType, input: &str) -> String {
    match chart {
        ChartType::Flowchart => flowchart_fallback(input),
        ChartType::Mindmap => mindmap_fallback(input, detect_input_kind(input)),
        ChartType::Gantt => gantt_fallback(input),
        ChartType::Pie => pie_fallback(input),
        ChartType::Quadrant => quadrant_fallback(input),
        ChartType::Journey => journey_fallback(input),
        ChartType::Git => git_fallback(input),
        ChartType::State => state_fallback(input),
        ChartType::Class => class_fallback(input),
        ChartType::Timeline => timeline_fallback(input),
        ChartType::Sequence => sequence_fallback(input),
    }
}

/// Truncated, delimiter-stripped excerpt of the input, safe to embed inside
/// any Mermaid shape delimiter. `(){}[]` would close a shape early, so they
/// are removed after truncation.
fn excerpt(input: &str, max: usize) -> String {
    let trimmed = input.trim();
    let mut short = if trimmed.chars().count() > max {
        let cut: String = trimmed.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        trimmed.to_string()
    };
    short.retain(|c| !matches!(c, '(' | ')' | '{' | '}' | '[' | ']'));
    let short = short.trim();
    if short.is_empty() {
        "Content".to_string()
    } else {
        short.to_string()
    }
}

fn gantt_fallback(input: &str) -> String {
    let title = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "gantt\n    title {title}\n    dateFormat  YYYY-MM-DD\n    section Phase 1\n    Planning    :done, plan, 2024-01-01, 7d\n    section Phase 2\n    Execution   :active, exec, after plan, 14d"
    )
}

fn pie_fallback(input: &str) -> String {
    let title = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "pie title {title}\n    \"Main Component\" : 45\n    \"Secondary\" : 30\n    \"Other\" : 25"
    )
}

fn quadrant_fallback(input: &str) -> String {
    let title = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "quadrantChart\n    title {title}\n    x-axis Low --> High\n    y-axis Low --> High\n    quadrant-1 High Priority\n    Item A: [0.3, 0.8]"
    )
}

fn journey_fallback(input: &str) -> String {
    let title = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "journey\n    title {title}\n    section Start\n      Begin process    : 3: User\n      Take action      : 2: User"
    )
}

fn git_fallback(input: &str) -> String {
    let subject = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "gitgraph\n    commit id: \"Initial: {subject}\"\n    branch feature\n    checkout feature\n    commit id: \"Work in progress\""
    )
}

fn state_fallback(input: &str) -> String {
    let trigger = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "stateDiagram-v2\n    [*] --> Start\n    Start --> Processing: {trigger}\n    Processing --> Complete"
    )
}

fn class_fallback(input: &str) -> String {
    let note = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "classDiagram\n    class Main {{\n        +attribute: string\n        +process(): void\n    }}\n    note for Main \"{note}\""
    )
}

fn flowchart_fallback(input: &str) -> String {
    let title = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "flowchart TD\n    A([Start: {title}])\n    A --> B[Analyze Input]\n    B --> C([Complete])"
    )
}

fn timeline_fallback(input: &str) -> String {
    let title = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!(
        "flowchart TD\n    A([Beginning])\n    A -->|Phase 1| B[Early Stage: {title}]\n    B -->|Phase 2| C([Future])"
    )
}

fn sequence_fallback(input: &str) -> String {
    let message = excerpt(input, UNIVERSAL_EXCERPT_MAX);
    format!("sequenceDiagram\n    User->>System: {message}\n    System-->>User: Response")
}

/// Mindmap fallback with a richer, four-branch taxonomy so a degenerate
/// result still reads as a real map. The branch set depends on whether the
/// input looked like source code or free text.
pub fn mindmap_fallback(input: &str, kind: InputKind) -> String {
    let root = excerpt(input, MINDMAP_EXCERPT_MAX);
    match kind {
        InputKind::Code => format!(
            "mindmap\n  root(({root}))\n    Code Structure\n      Entry Point\n        (main function)\n      Core Modules\n        Module A\n        Module B\n      Helper Utilities\n        (utility functions)\n    Key Logic\n      Primary Algorithm\n      Business Rules\n      State Management\n        (variables & state)\n    Data Flow\n      Input Sources\n      Data Processing\n      Output / Results\n    Dependencies\n      External Libraries\n      Internal Components"
        ),
        InputKind::Text => format!(
            "mindmap\n  root(({root}))\n    Core Idea\n      Main Thesis\n      Key Concepts\n        Concept X\n        Concept Y\n    Supporting Points\n      Argument 1\n        Evidence 1a\n        Evidence 1b\n      Argument 2\n        Evidence 2a\n    Open Questions\n      (Areas for clarification)\n      (Possible objections)\n    Action Items\n      Follow-up Research\n      Next Steps\n        Task 1\n        Task 2"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_type_yields_a_keyword_anchored_document() {
        for &chart in ChartType::all() {
            for input in ["", "   ", "Summarize quarterly revenue"] {
                let doc = fallback(chart, input);
                assert!(!doc.is_empty(), "{chart} fallback empty for {input:?}");
                assert!(
                    doc.to_ascii_lowercase()
                        .contains(&chart.keyword().to_ascii_lowercase()),
                    "{chart} fallback missing keyword: {doc}"
                );
                assert!(doc.len() >= 10, "{chart} fallback too short");
            }
        }
    }

    #[test]
    fn excerpt_strips_shape_delimiters() {
        let doc = fallback(ChartType::Pie, "Revenue (){}[] by region");
        assert!(doc.contains("Revenue  by region"));
        let title_line = doc.lines().next().unwrap();
        for c in ['(', ')', '{', '}', '['] {
            assert!(!title_line.contains(c), "title kept {c:?}: {title_line}");
        }
    }

    #[test]
    fn excerpt_truncates_long_input_with_ellipsis() {
        let long = "x".repeat(80);
        let doc = fallback(ChartType::Gantt, &long);
        let title = doc.lines().nth(1).unwrap().trim();
        assert!(title.ends_with("..."));
        assert!(title.len() <= "title ".len() + UNIVERSAL_EXCERPT_MAX);
    }

    #[test]
    fn excerpt_of_only_delimiters_uses_placeholder() {
        let doc = fallback(ChartType::Journey, "(){}[]");
        assert!(doc.contains("title Content"));
    }

    #[test]
    fn mindmap_variant_tracks_input_kind() {
        let code = fallback(ChartType::Mindmap, "def main():\n    run()");
        assert!(code.contains("Code Structure"));
        assert!(code.contains("Dependencies"));

        let text = fallback(ChartType::Mindmap, "the ethics of urban beekeeping");
        assert!(text.contains("Core Idea"));
        assert!(text.contains("Action Items"));
    }

    #[test]
    fn mindmap_root_is_excerpted_and_delimiter_free() {
        let doc = mindmap_fallback("Compare [A] and {B} (today)", InputKind::Text);
        assert!(doc.starts_with("mindmap\n  root((Compare A and B today))"));
    }

    #[test]
    fn timeline_fallback_is_flowchart_shaped() {
        let doc = fallback(ChartType::Timeline, "rise of the railways");
        assert!(doc.starts_with("flowchart TD"));
        assert!(doc.contains("-->|Phase 1|"));
    }

    proptest! {
        #[test]
        fn never_empty_for_any_input(s in "\\PC*") {
            for &chart in ChartType::all() {
                let doc = fallback(chart, &s);
                prop_assert!(doc.len() >= 10);
            }
        }

        #[test]
        fn excerpt_never_contains_delimiters(s in "\\PC*") {
            let out = excerpt(&s, 50);
            prop_assert!(!out.contains(['(', ')', '{', '}', '[', ']']), "excerpt must not contain delimiters");
            prop_assert!(!out.is_empty());
        }
    }
}

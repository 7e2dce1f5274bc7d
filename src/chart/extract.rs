use super::flowchart;
use super::sanitize::sanitize;
use super::types::ChartType;

/// Locate the Mermaid document embedded in a raw completion.
///
/// Returns `None` when nothing anchored on the type's keyword can be found;
/// that is the expected failure branch, routed to a fallback by the
/// dispatcher. Flowcharts (and timelines, which share the document shape)
/// never fail here: their candidate text goes through reconstruction, which
/// carries its own terminal template.
pub fn extract(chart: ChartType, raw: &str) -> Option<String> {
    match chart {
        ChartType::Flowchart | ChartType::Timeline => Some(extract_flowchart(raw)),
        ChartType::Mindmap => extract_mindmap(raw),
        _ => extract_keyword_anchored(chart.keyword(), raw),
    }
}

/// Uniform extraction: prefer a ```mermaid fenced block, otherwise take
/// everything from the first keyword occurrence. The candidate counts only if
/// it actually contains the keyword.
fn extract_keyword_anchored(keyword: &str, raw: &str) -> Option<String> {
    let clean = sanitize(raw);
    let candidate = candidate(&clean, keyword)?;
    if contains_ignore_case(&candidate, keyword) {
        Some(candidate)
    } else {
        None
    }
}

fn extract_flowchart(raw: &str) -> String {
    let clean = sanitize(raw);
    let candidate = candidate(&clean, "flowchart").unwrap_or(clean);
    flowchart::reconstruct(&candidate)
}

/// Mindmap candidates are repaired line by line: blank lines go, trailing
/// whitespace goes, and a missing `mindmap` root keyword is prepended.
/// Indentation is preserved because it carries the tree structure. A repaired
/// result under 10 characters is useless and counts as a failure.
fn extract_mindmap(raw: &str) -> Option<String> {
    let clean = sanitize(raw);
    let candidate = candidate(&clean, "mindmap")?;

    let mut lines: Vec<&str> = candidate
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    if !contains_ignore_case(lines[0], "mindmap") {
        lines.insert(0, "mindmap");
    }

    let repaired = lines.join("\n");
    if repaired.len() < 10 { None } else { Some(repaired) }
}

/// Candidate document inside sanitized (pure-ASCII) text.
fn candidate(text: &str, keyword: &str) -> Option<String> {
    fenced_block(text).or_else(|| keyword_tail(text, keyword))
}

/// Interior of the first ```mermaid fenced block, trimmed.
fn fenced_block(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let open = lower.find("```mermaid")?;
    let body_at = open + "```mermaid".len();
    let close = lower[body_at..].find("```")? + body_at;
    Some(text[body_at..close].trim().to_string())
}

/// Everything from the first keyword occurrence to the end of text, trimmed.
fn keyword_tail(text: &str, keyword: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let at = lower.find(&keyword.to_ascii_lowercase())?;
    Some(text[at..].trim().to_string())
}

fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fenced_gantt_block() {
        let raw = "Here is your chart:\n```mermaid\ngantt\n    title Sprint\n    dateFormat YYYY-MM-DD\n```\nHope this helps!";
        let doc = extract(ChartType::Gantt, raw).expect("extracts");
        assert!(doc.starts_with("gantt"));
        assert!(!doc.contains("Hope this helps"));
        assert!(!doc.contains("```"));
    }

    #[test]
    fn falls_back_to_keyword_tail_without_fence() {
        let raw = "Sure! pie title Browser Share\n    \"Chrome\" : 65\n    \"Other\" : 35";
        let doc = extract(ChartType::Pie, raw).expect("extracts");
        assert!(doc.starts_with("pie title"));
        assert!(doc.contains("Chrome"));
    }

    #[test]
    fn fence_matching_is_case_insensitive() {
        let raw = "```MERMAID\njourney\n    title Trip\n    section Go\n      Walk : 3: User\n```";
        let doc = extract(ChartType::Journey, raw).expect("extracts");
        assert!(doc.starts_with("journey"));
    }

    #[test]
    fn fenced_block_without_the_keyword_is_rejected() {
        let raw = "```mermaid\nsomething else entirely\n```";
        assert_eq!(extract(ChartType::Gantt, raw), None);
    }

    #[test]
    fn prose_without_any_anchor_is_rejected() {
        assert_eq!(extract(ChartType::State, "I could not generate that."), None);
    }

    #[test]
    fn successful_extraction_contains_the_keyword() {
        let samples = [
            (ChartType::Quadrant, "```mermaid\nquadrantChart\n    title Effort vs Impact\n```"),
            (ChartType::State, "stateDiagram-v2\n    [*] --> Idle\n    Idle --> Busy"),
            (ChartType::Class, "```mermaid\nclassDiagram\n    class User\n```"),
            (ChartType::Git, "gitgraph\n    commit id: \"init\""),
            (ChartType::Sequence, "sequenceDiagram\n    A->>B: hi"),
        ];
        for (chart, raw) in samples {
            let doc = extract(chart, raw).expect("extracts");
            assert!(
                contains_ignore_case(&doc, chart.keyword()),
                "{chart} document missing its keyword: {doc}"
            );
        }
    }

    #[test]
    fn mindmap_missing_root_keyword_is_repaired() {
        let raw = "```mermaid\n  root((X))\n    A\n```";
        let doc = extract(ChartType::Mindmap, raw).expect("extracts");
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "mindmap");
        assert_eq!(lines[1], "root((X))");
        assert_eq!(lines[2], "    A");
    }

    #[test]
    fn mindmap_keeps_existing_root_keyword() {
        let raw = "mindmap\n  root((Topic))\n    Branch";
        let doc = extract(ChartType::Mindmap, raw).expect("extracts");
        assert_eq!(doc, "mindmap\n  root((Topic))\n    Branch");
    }

    #[test]
    fn mindmap_shorter_than_floor_fails() {
        assert_eq!(extract(ChartType::Mindmap, "```mermaid\nmindmap\n```"), None);
    }

    #[test]
    fn mindmap_blank_lines_are_dropped() {
        let raw = "mindmap\n\n  root((T))\n\n    Leaf\n";
        let doc = extract(ChartType::Mindmap, raw).expect("extracts");
        assert_eq!(doc, "mindmap\n  root((T))\n    Leaf");
    }

    #[test]
    fn flowchart_extraction_reconstructs_the_graph() {
        let raw = "```mermaid\nflowchart TD\n A([Start]) --> B[Process]\n B --> C{Decide?}\n C -->|Yes| D([End])\n```";
        let doc = extract(ChartType::Flowchart, raw).expect("always some");
        assert_eq!(
            doc,
            "flowchart TD\n    A([Start])\n    B[Process]\n    C{Decide?}\n    D([End])\n    A --> B\n    B --> C\n    C -->|Yes| D"
        );
    }

    #[test]
    fn flowchart_garbage_becomes_the_minimal_template() {
        let doc = extract(ChartType::Flowchart, "No fence, no nodes, nothing.").expect("always some");
        assert_eq!(doc, flowchart::MINIMAL_FLOWCHART);
    }

    #[test]
    fn flowchart_nodes_are_recovered_without_fence_or_header() {
        // No fenced block and no "flowchart" keyword, but a recognizable
        // node/edge pattern: the whole text is scanned.
        let raw = "Try this: A[Load] --> B{Valid?} and then B -->|yes| C[Save]";
        let doc = extract(ChartType::Flowchart, raw).expect("always some");
        assert!(doc.contains("    A[Load]"));
        assert!(doc.contains("    B -->|yes| C"));
    }

    #[test]
    fn timeline_uses_the_flowchart_pipeline() {
        let raw = "flowchart TD\n A([1900]) --> B[Expansion]\n B --> C([Today])";
        let doc = extract(ChartType::Timeline, raw).expect("always some");
        assert!(doc.starts_with("flowchart TD"));
        assert!(doc.contains("    A([1900])"));
    }

    #[test]
    fn smart_punctuation_is_sanitized_before_matching() {
        let raw = "```mermaid\ngantt\n    title Caf\u{00E9} \u{2014} rollout\n```";
        let doc = extract(ChartType::Gantt, raw).expect("extracts");
        assert!(doc.contains("Cafe - rollout"));
    }
}

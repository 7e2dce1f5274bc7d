use super::types::ChartType;

/// Whether the user's input looks like source code or free text. Selects the
/// mindmap fallback variant and the flowchart routing for pasted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Code,
    Text,
}

/// Tokens that mark input as source code. Checked case-sensitively against
/// the raw input; trailing spaces keep `def ` from matching words like
/// "defer".
const CODE_TOKENS: &[&str] = &[
    "function", "class", "def ", "public ", "private ", "import ", "const ", "let ", "var ",
    "</", "<?", "print(",
];

/// Priority-ordered classification rules, first match wins. Each entry pairs
/// a chart type with the vocabulary that suggests it; phrases are matched
/// case-insensitively on word boundaries.
const RULES: &[(ChartType, &[&str])] = &[
    (
        ChartType::Gantt,
        &[
            "project", "schedule", "gantt", "deadline", "milestones", "tasks", "phases",
            "planning", "development timeline", "roadmap",
        ],
    ),
    (
        ChartType::Pie,
        &[
            "percentage", "statistics", "breakdown", "distribution", "share", "proportion",
            "pie", "portion", "survey results", "demographics",
        ],
    ),
    (
        ChartType::Quadrant,
        &[
            "quadrant", "matrix", "analysis", "comparison", "priority", "importance",
            "urgency", "swot", "categorize",
        ],
    ),
    (
        ChartType::Journey,
        &[
            "user journey", "customer experience", "journey map", "user flow", "touchpoints",
            "experience", "path",
        ],
    ),
    (
        ChartType::Git,
        &[
            "git", "branch", "merge", "commit", "repository", "version control",
            "development workflow", "feature branch",
        ],
    ),
    (
        ChartType::State,
        &[
            "state", "status", "condition", "mode", "phase", "stage", "transition",
            "workflow states",
        ],
    ),
    (
        ChartType::Class,
        &[
            "class", "object", "inheritance", "relationship", "entity", "model", "database",
            "structure", "schema",
        ],
    ),
    (
        ChartType::Flowchart,
        &[
            "step", "process", "workflow", "procedure", "how to", "tutorial", "guide",
            "algorithm", "method",
        ],
    ),
    (
        ChartType::Timeline,
        &[
            "timeline", "history", "chronology", "sequence", "order", "events", "evolution",
            "development",
        ],
    ),
    (
        ChartType::Mindmap,
        &[
            "organize", "structure", "breakdown", "categories", "topics", "outline", "plan",
            "concept", "overview",
        ],
    ),
    (
        ChartType::Sequence,
        &[
            "interaction", "communication", "dialogue", "conversation", "relationship",
            "between", "protocol", "flow",
        ],
    ),
];

/// Heuristic chart type detection for input without a pinned type. Code is
/// diagrammed as a flowchart; input matching no rule becomes a mindmap. This
/// is a deterministic keyword heuristic, nothing more.
pub fn detect_chart_type(input: &str) -> ChartType {
    if detect_input_kind(input) == InputKind::Code {
        return ChartType::Flowchart;
    }

    let lower = input.to_lowercase();
    for (chart, phrases) in RULES {
        if phrases.iter().any(|phrase| contains_phrase(&lower, phrase)) {
            return *chart;
        }
    }

    ChartType::Mindmap
}

pub fn detect_input_kind(input: &str) -> InputKind {
    if CODE_TOKENS.iter().any(|token| input.contains(token)) {
        InputKind::Code
    } else {
        InputKind::Text
    }
}

/// Whole-word/phrase containment. `haystack` must already be lowercased.
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(phrase) {
        let at = start + pos;
        let end = at + phrase.len();
        let left_ok = at == 0 || !is_word_byte(bytes[at - 1]);
        let right_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if left_ok && right_ok {
            return true;
        }
        start = at + 1;
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

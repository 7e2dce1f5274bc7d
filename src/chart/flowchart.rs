//! Flowchart reconstruction.
//!
//! Model output for node/edge diagrams is the least syntactically reliable
//! kind, so the raw text is never passed through. Instead the node
//! declarations and edges are re-parsed and a normalized document is emitted
//! from the recovered graph; anything unparseable is discarded. This is a
//! best-effort recovery pass with a fixed failure mode, not a grammar.

/// Emitted when the scan recovers no nodes or no edges.
pub const MINIMAL_FLOWCHART: &str = "flowchart TD\n    A([Start])\n    A --> B[Process]\n    B --> C{Decision?}\n    C -->|Yes| D[Action]\n    C -->|No| E([End])\n    D --> E";

/// An edge recovered from the raw text. Shape groups on either endpoint are
/// kept so nodes can be harvested from edges when no standalone declarations
/// were found.
#[derive(Debug, Clone, PartialEq)]
struct Edge {
    from: String,
    from_shape: Option<String>,
    to: String,
    to_shape: Option<String>,
    label: Option<String>,
}

/// Re-derive a clean graph from untrusted flowchart text and re-emit it.
/// Total and deterministic: unparseable input yields the minimal template.
pub fn reconstruct(raw: &str) -> String {
    let mut nodes = scan_nodes(raw);
    let edges = scan_edges(raw);

    if nodes.is_empty() {
        for edge in &edges {
            if let Some(shape) = &edge.from_shape {
                upsert(&mut nodes, edge.from.clone(), shape.clone());
            }
            if let Some(shape) = &edge.to_shape {
                upsert(&mut nodes, edge.to.clone(), shape.clone());
            }
        }
    }

    if nodes.is_empty() || edges.is_empty() {
        return MINIMAL_FLOWCHART.to_string();
    }

    let mut lines = vec!["flowchart TD".to_string()];
    for (id, shape) in &nodes {
        lines.push(format!("    {id}{shape}"));
    }
    for edge in &edges {
        match &edge.label {
            Some(label) => lines.push(format!("    {} -->|{}| {}", edge.from, label, edge.to)),
            None => lines.push(format!("    {} --> {}", edge.from, edge.to)),
        }
    }
    lines.join("\n")
}

/// Node declarations: `<uppercase letter><digits?>` followed by a shape
/// group. First-seen order is kept; a re-declaration updates the content in
/// place. Edge endpoints declared inline are picked up here too.
fn scan_nodes(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let mut nodes: Vec<(String, String)> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let Some(id_end) = match_id(bytes, i) else {
            i += 1;
            continue;
        };
        let shape_at = skip_ws(bytes, id_end);
        let Some(shape_end) = match_shape(bytes, shape_at) else {
            i += 1;
            continue;
        };
        upsert(
            &mut nodes,
            text[i..id_end].to_string(),
            text[shape_at..shape_end].to_string(),
        );
        i = shape_end;
    }
    nodes
}

/// Edges: `<id> --> <id>` and `<id> -->|<label>| <id>`, where either id may
/// carry an ignored shape group (models often write `A([Start]) --> B[Next]`).
/// Duplicates are kept in scan order.
fn scan_edges(text: &str) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut i = 0;
    while i < text.len() {
        match match_edge(text, i) {
            Some((edge, end)) => {
                edges.push(edge);
                i = end;
            }
            None => i += 1,
        }
    }
    edges
}

fn match_edge(text: &str, at: usize) -> Option<(Edge, usize)> {
    let bytes = text.as_bytes();

    let from_end = match_id(bytes, at)?;
    let mut pos = skip_ws(bytes, from_end);
    let from_shape = match match_shape(bytes, pos) {
        Some(end) => {
            let shape = text[pos..end].to_string();
            pos = skip_ws(bytes, end);
            Some(shape)
        }
        None => None,
    };

    if !text[pos..].starts_with("-->") {
        return None;
    }
    pos = skip_ws(bytes, pos + 3);

    let label = if bytes.get(pos) == Some(&b'|') {
        let close = text[pos + 1..].find('|')? + pos + 1;
        let label = text[pos + 1..close].to_string();
        pos = skip_ws(bytes, close + 1);
        Some(label)
    } else {
        None
    };

    let to_end = match_id(bytes, pos)?;
    let to = text[pos..to_end].to_string();
    let mut end = to_end;
    let to_shape = {
        let shape_at = skip_ws(bytes, to_end);
        match match_shape(bytes, shape_at) {
            Some(shape_end) => {
                end = shape_end;
                Some(text[shape_at..shape_end].to_string())
            }
            None => None,
        }
    };

    Some((
        Edge {
            from: text[at..from_end].to_string(),
            from_shape,
            to,
            to_shape,
            label,
        },
        end,
    ))
}

/// Identifier = one ASCII uppercase letter plus optional digits. Returns the
/// exclusive end offset.
fn match_id(bytes: &[u8], at: usize) -> Option<usize> {
    if at >= bytes.len() || !bytes[at].is_ascii_uppercase() {
        return None;
    }
    let mut end = at + 1;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    Some(end)
}

/// Shape group = `(...)`, `[...]` or `{...}`; the interior runs to the first
/// matching close delimiter. Returns the exclusive end offset, delimiters
/// included in the span.
fn match_shape(bytes: &[u8], at: usize) -> Option<usize> {
    let close = match bytes.get(at)? {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        _ => return None,
    };
    let mut i = at + 1;
    while i < bytes.len() {
        if bytes[i] == close {
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

fn skip_ws(bytes: &[u8], mut at: usize) -> usize {
    while at < bytes.len() && bytes[at].is_ascii_whitespace() {
        at += 1;
    }
    at
}

fn upsert(nodes: &mut Vec<(String, String)>, id: String, shape: String) {
    match nodes.iter_mut().find(|(existing, _)| *existing == id) {
        Some(entry) => entry.1 = shape,
        None => nodes.push((id, shape)),
    }
}

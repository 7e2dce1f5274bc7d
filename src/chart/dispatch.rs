use crate::completion::CompletionClient;
use crate::prompts;

use super::classify::detect_chart_type;
use super::extract::extract;
use super::fallback::fallback;
use super::types::{ChartRequest, ChartResponse, ChartType};

/// Extracted documents shorter than this are treated as extraction failures
/// and replaced by the fallback.
pub const MIN_DOCUMENT_LEN: usize = 10;

/// The prompt/extractor/fallback triple for one canonical chart type.
struct Pipeline {
    prompt: fn(&str) -> String,
    extract: fn(&str) -> Option<String>,
    fallback: fn(&str) -> String,
}

fn pipeline_for(chart: ChartType) -> Pipeline {
    match chart {
        ChartType::Flowchart => Pipeline {
            prompt: prompts::flowchart,
            extract: |raw| extract(ChartType::Flowchart, raw),
            fallback: |input| fallback(ChartType::Flowchart, input),
        },
        ChartType::Mindmap => Pipeline {
            prompt: prompts::mindmap,
            extract: |raw| extract(ChartType::Mindmap, raw),
            fallback: |input| fallback(ChartType::Mindmap, input),
        },
        ChartType::Gantt => Pipeline {
            prompt: prompts::gantt,
            extract: |raw| extract(ChartType::Gantt, raw),
            fallback: |input| fallback(ChartType::Gantt, input),
        },
        ChartType::Pie => Pipeline {
            prompt: prompts::pie,
            extract: |raw| extract(ChartType::Pie, raw),
            fallback: |input| fallback(ChartType::Pie, input),
        },
        ChartType::Quadrant => Pipeline {
            prompt: prompts::quadrant,
            extract: |raw| extract(ChartType::Quadrant, raw),
            fallback: |input| fallback(ChartType::Quadrant, input),
        },
        ChartType::Journey => Pipeline {
            prompt: prompts::journey,
            extract: |raw| extract(ChartType::Journey, raw),
            fallback: |input| fallback(ChartType::Journey, input),
        },
        ChartType::Git => Pipeline {
            prompt: prompts::git,
            extract: |raw| extract(ChartType::Git, raw),
            fallback: |input| fallback(ChartType::Git, input),
        },
        ChartType::State => Pipeline {
            prompt: prompts::state,
            extract: |raw| extract(ChartType::State, raw),
            fallback: |input| fallback(ChartType::State, input),
        },
        ChartType::Class => Pipeline {
            prompt: prompts::class,
            extract: |raw| extract(ChartType::Class, raw),
            fallback: |input| fallback(ChartType::Class, input),
        },
        ChartType::Timeline => Pipeline {
            prompt: prompts::timeline,
            extract: |raw| extract(ChartType::Timeline, raw),
            fallback: |input| fallback(ChartType::Timeline, input),
        },
        ChartType::Sequence => Pipeline {
            prompt: prompts::sequence,
            extract: |raw| extract(ChartType::Sequence, raw),
            fallback: |input| fallback(ChartType::Sequence, input),
        },
    }
}

/// Generic entry point. The explicit chart type wins; the classifier only
/// runs when the caller pinned nothing. Empty input is the one hard error:
/// no meaningful fallback can be made from nothing.
pub fn dispatch(
    client: &dyn CompletionClient,
    request: &ChartRequest,
) -> Result<ChartResponse, String> {
    let input = request.input.trim();
    if input.is_empty() {
        return Err("Input text is required".to_string());
    }

    let chart = match &request.chart_type {
        Some(tag) => ChartType::resolve(tag),
        None => detect_chart_type(input),
    };

    Ok(generate(client, input, chart))
}

/// Run one pinned-type generation. Total: whatever the completion service
/// does, the response carries a non-empty, keyword-anchored document.
pub fn generate(client: &dyn CompletionClient, input: &str, chart: ChartType) -> ChartResponse {
    let pipeline = pipeline_for(chart);
    let prompt = (pipeline.prompt)(input);

    match client.complete(&prompt) {
        Ok(content) => match (pipeline.extract)(&content) {
            Some(document) if document.len() >= MIN_DOCUMENT_LEN => ChartResponse {
                success: true,
                chart_type: chart,
                mermaid_code: document,
                raw_response: Some(content),
                fallback: false,
                error: None,
            },
            _ => ChartResponse {
                success: true,
                chart_type: chart,
                mermaid_code: (pipeline.fallback)(input),
                raw_response: Some(content),
                fallback: true,
                error: None,
            },
        },
        Err(error) => ChartResponse {
            success: false,
            chart_type: chart,
            mermaid_code: (pipeline.fallback)(input),
            raw_response: None,
            fallback: true,
            error: Some(error),
        },
    }
}

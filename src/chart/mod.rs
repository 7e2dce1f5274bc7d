mod classify;
mod dispatch;
mod extract;
mod fallback;
mod flowchart;
mod sanitize;
mod types;

pub use classify::{InputKind, detect_chart_type, detect_input_kind};
pub use dispatch::{MIN_DOCUMENT_LEN, dispatch, generate};
pub use extract::extract;
pub use fallback::{fallback, mindmap_fallback};
pub use flowchart::{MINIMAL_FLOWCHART, reconstruct};
pub use sanitize::sanitize;
pub use types::{ChartRequest, ChartResponse, ChartType};

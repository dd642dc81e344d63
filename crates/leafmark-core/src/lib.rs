mod escape;
mod options;
mod pipeline;
mod report;
mod sanitize;
mod stash;
mod table;

pub use options::RenderOptions;
pub use pipeline::render;
pub use report::{
    Deficiency, Disease, HealthAssessment, HealthStatus, Pest, PlantAnalysis, Suggestions,
    Treatment, advice_message, analysis_message,
};
pub use sanitize::render_sanitized;

//! brief_gen — Project DNA brief generation over a pluggable provider.

mod generator;
mod prompt;

pub use generator::{generate_brief, BriefOptions, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use prompt::DEFAULT_SYSTEM_PROMPT;

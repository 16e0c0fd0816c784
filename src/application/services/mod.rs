mod pipeline_service;
mod voice_model_guard;

pub use pipeline_service::{PipelineError, PipelineService};
pub use voice_model_guard::VoiceModelGuard;

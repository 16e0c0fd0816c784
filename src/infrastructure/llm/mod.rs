mod openai_condenser;

pub use openai_condenser::{DEFAULT_DIRECTIVE, OpenAiCondenser};

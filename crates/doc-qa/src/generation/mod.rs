//! Answer generation: prompt templating around one completion call

mod answer;
mod prompt;

pub use answer::AnswerGenerator;
pub use prompt::PromptBuilder;

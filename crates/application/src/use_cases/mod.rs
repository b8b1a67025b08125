mod reverse_chain;
mod synthesize_answer;

pub use reverse_chain::{RefuseHandler, ReverseSynthHandler};
pub use synthesize_answer::SynthesizeAnswer;

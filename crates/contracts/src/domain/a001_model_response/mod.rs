pub mod aggregate;
pub mod response;

pub use aggregate::{AccordionEntry, ModelResponse, ResponseSet};
pub use response::AskQuestionResponse;

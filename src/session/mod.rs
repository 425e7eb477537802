//! Interaction State Machine - per-tool sessions and simulated processing

mod controller;
mod machine;
mod outcome;
mod policy;
mod upload;

pub use controller::{CompletionEvent, FAULT_NOTICE, SessionController};
pub use machine::{Phase, ProcessRequest, Session};
pub use outcome::{OutputFile, ResultPayload, ResultRecord};
pub use policy::{
    ACTION_COMPLETED, CompletionPolicy, CompletionRule, EXTRACTED_TEXT, SimulatedPolicy, output_file_for,
    validate_completion_table,
};
pub use upload::UploadedFile;

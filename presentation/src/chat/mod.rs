//! Interactive interview session

mod repl;

pub use repl::InterviewRepl;

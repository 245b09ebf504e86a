//! Lossless tokenizer and mutable model for todo.txt task lines.
//!
//! A line such as `x 2020-01-02 (A) Call mom +family @phone t:2020-01-01` is split into
//! typed [`Token`]s whose texts concatenate back to the exact line. A [`Task`] owns the
//! token sequence of one line, derives its attributes from it and edits it in place.

pub mod config;
pub mod date;
pub mod logging;
pub mod parser;
pub mod task;

pub use config::TasksConfig;
pub use parser::task::{
    token::{KindSet, Token, TokenKind},
    tokenize,
};
pub use task::{Priority, Task};

// Re-export logging functions for easier access
pub use logging::init as init_logging;

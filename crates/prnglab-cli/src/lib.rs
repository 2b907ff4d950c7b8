//! # prnglab-cli
//!
//! CLI output, record rendering, the additive working sequence, and shell
//! completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;
pub mod worklist;

pub use presenter::{CLISequencePresenter, OutputMode, SequencePresenter};
pub use worklist::{WorkingSequence, WorklistError};

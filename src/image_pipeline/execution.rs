//! Execution harness module
//!
//! Runs the recolor over a whole image either on the calling thread or split
//! across scoped worker threads, timing each run.

mod parallel;
mod sequential;
pub mod types;


pub use parallel::run_parallel;
pub use sequential::run_sequential;
pub use types::RunOutcome;

//! Line-driven command dispatch loop for a composable command toolkit.
//!
//! [`looping::While`] reads lines from an input stream one at a time, hands
//! each line to a caller-supplied [`looping::LineProcessor`], and executes
//! whatever command the processor yields against shared output/error streams.
//! Execution is strictly sequential and fail-fast: the first unit failure,
//! read error, or observed cancellation stops the loop.
//!
//! The architecture separates:
//!
//! - **[`command`]**: the executable contract every unit implements.
//! - **[`context`]**: cooperative cancellation shared across one invocation.
//! - **[`lines`]**: the lazy line source feeding the loop.
//! - **[`looping`]**: the dispatch loop itself.
//! - **[`options`]**: construction-time options (field separator etc.)
//!   stored for collaborating processors, never consumed by the loop.

pub mod command;
pub mod context;
pub mod lines;
pub mod logging;
pub mod looping;
pub mod options;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

//! Line-driven command dispatch loop, the `while`-style primitive.
//!
//! [`While`] consumes its input one line at a time. For each line it asks the
//! configured [`LineProcessor`] for a [`Dispatch`] decision and runs the
//! yielded command, if any, against the shared output and stderr streams.
//! The loop is strictly sequential and fail-fast: the first read error, unit
//! failure, or observed cancellation is surfaced as the loop's result, and
//! end-of-stream is success.

use std::fmt;
use std::io::{self, BufReader, Read, Write};

use anyhow::{Result, bail};
use tracing::{debug, instrument};

use crate::command::Command;
use crate::context::ExecContext;
use crate::lines::LineSource;
use crate::options::{Configure, Flags};

/// Outcome of handing one line to a processor.
///
/// Skipping is a first-class control path (blank lines, comments), never an
/// error.
pub enum Dispatch {
    /// The line produces no work; the loop moves to the next line.
    Skip,
    /// Run this command for the line.
    Run(Box<dyn Command>),
}

/// Maps one line of input to an optional command.
///
/// Invoked exactly once per line, synchronously, in line order. Processors
/// that need state across lines use interior mutability; the loop owns none
/// of it.
pub trait LineProcessor {
    fn process(&self, line: &str) -> Dispatch;
}

impl<F> LineProcessor for F
where
    F: Fn(&str) -> Dispatch,
{
    fn process(&self, line: &str) -> Dispatch {
        self(line)
    }
}

/// The `while` command: dispatch one command per line of input.
pub struct While {
    processor: Option<Box<dyn LineProcessor>>,
    flags: Flags,
}

impl While {
    /// Build a loop around `processor` with no options set.
    pub fn new<P: LineProcessor + 'static>(processor: P) -> Self {
        Self {
            processor: Some(Box::new(processor)),
            flags: Flags::default(),
        }
    }

    /// Loop with no processor attached. Executing it fails until
    /// [`While::with_processor`] supplies one.
    pub fn unconfigured() -> Self {
        Self {
            processor: None,
            flags: Flags::default(),
        }
    }

    /// Attach or replace the processor.
    pub fn with_processor<P: LineProcessor + 'static>(mut self, processor: P) -> Self {
        self.processor = Some(Box::new(processor));
        self
    }

    /// Apply a construction-time option.
    pub fn with(mut self, option: impl Configure) -> Self {
        option.configure(&mut self.flags);
        self
    }

    /// Option state this loop was built with. The loop itself does not
    /// consume options; collaborating processors read them from here.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }
}

impl fmt::Display for While {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("while")
    }
}

impl Command for While {
    /// Drive line-by-line dispatch to completion or first failure.
    ///
    /// Cancellation is checked at every line boundary, so an
    /// already-cancelled context halts before any line is read. Each
    /// dispatched command receives an empty input stream: lines are
    /// processed independently and a unit's own input is considered
    /// exhausted.
    #[instrument(skip_all)]
    fn execute(
        &self,
        ctx: &ExecContext,
        input: &mut dyn Read,
        output: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()> {
        let Some(processor) = self.processor.as_deref() else {
            bail!("while: a line processor is required");
        };

        let mut source = LineSource::new(BufReader::new(input));
        loop {
            ctx.check()?;
            let Some(item) = source.next() else {
                break;
            };
            let line = item?;
            match processor.process(&line.text) {
                Dispatch::Skip => {
                    debug!(line = line.number, "skipped");
                }
                Dispatch::Run(command) => {
                    debug!(line = line.number, "dispatching");
                    command.execute(ctx, &mut io::empty(), output, stderr)?;
                }
            }
        }

        debug!("input exhausted");
        Ok(())
    }
}

//! Executable unit contract shared by every command in the toolkit.
//!
//! The [`Command`] trait decouples the dispatch loop from what a unit actually
//! does. A unit may itself be a composite pipeline; the loop only runs it and
//! propagates its result.

use std::io::{Read, Write};

use anyhow::Result;

use crate::context::ExecContext;

/// A runnable unit of work.
///
/// Implementations read from `input`, write product output to `output` and
/// diagnostics to `stderr`, and are expected to consult `ctx` before doing
/// significant work. Failures propagate verbatim to the caller.
pub trait Command {
    /// Run the command to completion or first failure.
    fn execute(
        &self,
        ctx: &ExecContext,
        input: &mut dyn Read,
        output: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()>;
}

/// Adapter that turns a closure with the execute signature into a
/// [`Command`]. Useful for ad-hoc units and tests.
pub struct CommandFn<F>(pub F);

impl<F> Command for CommandFn<F>
where
    F: Fn(&ExecContext, &mut dyn Read, &mut dyn Write, &mut dyn Write) -> Result<()>,
{
    fn execute(
        &self,
        ctx: &ExecContext,
        input: &mut dyn Read,
        output: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()> {
        (self.0)(ctx, input, output, stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_fn_forwards_streams_and_result() {
        let cmd = CommandFn(
            |_ctx: &ExecContext,
             input: &mut dyn Read,
             output: &mut dyn Write,
             stderr: &mut dyn Write|
             -> Result<()> {
                let mut text = String::new();
                input.read_to_string(&mut text)?;
                write!(output, "out:{text}")?;
                write!(stderr, "diag")?;
                Ok(())
            },
        );

        let ctx = ExecContext::new();
        let mut input = "payload".as_bytes();
        let mut output = Vec::new();
        let mut stderr = Vec::new();
        cmd.execute(&ctx, &mut input, &mut output, &mut stderr)
            .expect("execute");

        assert_eq!(output, b"out:payload");
        assert_eq!(stderr, b"diag");
    }

    #[test]
    fn command_fn_propagates_errors() {
        let cmd = CommandFn(
            |_ctx: &ExecContext,
             _input: &mut dyn Read,
             _output: &mut dyn Write,
             _stderr: &mut dyn Write|
             -> Result<()> { Err(anyhow::anyhow!("unit failed")) },
        );

        let ctx = ExecContext::new();
        let mut input = std::io::empty();
        let err = cmd
            .execute(&ctx, &mut input, &mut Vec::<u8>::new(), &mut Vec::<u8>::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "unit failed");
    }
}

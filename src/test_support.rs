//! Test-only helpers for constructing processors and commands.

use std::io::{Read, Write};

use anyhow::{Result, anyhow};

use crate::command::{Command, CommandFn};
use crate::context::ExecContext;
use crate::looping::Dispatch;

/// Processor that writes `prefix` plus the line, one output line per input
/// line.
pub fn prefix_processor(prefix: &'static str) -> impl Fn(&str) -> Dispatch {
    move |line: &str| {
        let line = line.to_string();
        Dispatch::Run(Box::new(CommandFn(
            move |_ctx: &ExecContext,
                  _input: &mut dyn Read,
                  output: &mut dyn Write,
                  _stderr: &mut dyn Write|
                  -> Result<()> {
                writeln!(output, "{prefix}{line}")?;
                Ok(())
            },
        )))
    }
}

/// Like [`prefix_processor`], but skips blank and whitespace-only lines.
pub fn skip_blank_processor(prefix: &'static str) -> impl Fn(&str) -> Dispatch {
    let run = prefix_processor(prefix);
    move |line: &str| {
        if line.trim().is_empty() {
            Dispatch::Skip
        } else {
            run(line)
        }
    }
}

/// Command that always fails with `message`.
pub fn failing_command(message: &'static str) -> Box<dyn Command> {
    Box::new(CommandFn(
        move |_ctx: &ExecContext,
              _input: &mut dyn Read,
              _output: &mut dyn Write,
              _stderr: &mut dyn Write|
              -> Result<()> { Err(anyhow!(message)) },
    ))
}

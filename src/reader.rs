use std::io;

use reedline::{Prompt, Reedline, Signal};

use crate::error::ShellError;

/// Hard cap on one input line, matching the historical buffer size.
pub const MAX_LINE: usize = 1024;

#[derive(Debug)]
pub enum LineResult {
    Line(String),
    EndOfInput,
    Interrupted,
    Failed(io::Error),
}

/// Acquire one line from the terminal.
///
/// Over-long lines are rejected with `LineTooLong` instead of being
/// truncated. A read failure while stdin is still a terminal is
/// reported and the loop reprompts; once stdin is no terminal at all
/// there is nothing left to reprompt on, so that counts as end of
/// input.
pub fn read_line(
    editor: &mut Reedline,
    prompt: &dyn Prompt,
) -> Result<LineResult, ShellError> {
    match editor.read_line(prompt) {
        Ok(Signal::Success(buf)) => {
            if buf.len() > MAX_LINE {
                return Err(ShellError::LineTooLong);
            }
            Ok(LineResult::Line(buf))
        }
        Ok(Signal::CtrlD) => Ok(LineResult::EndOfInput),
        Ok(Signal::CtrlC) => Ok(LineResult::Interrupted),
        Err(e) => {
            let is_tty = unsafe { libc::isatty(libc::STDIN_FILENO) } == 1;
            Ok(read_failure(e, is_tty))
        }
    }
}

fn read_failure(err: io::Error, stdin_is_tty: bool) -> LineResult {
    if stdin_is_tty {
        LineResult::Failed(err)
    } else {
        LineResult::EndOfInput
    }
}

/// Length guard shared with the expansion step.
pub fn check_line_len(line: &str) -> Result<(), ShellError> {
    if line.len() > MAX_LINE {
        Err(ShellError::LineTooLong)
    } else {
        Ok(())
    }
}

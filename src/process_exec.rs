use std::ffi::CString;
use std::{io, ptr};

use libc::{c_char, execvp, fork, waitpid};
use nu_ansi_term::Color;

use crate::error::ShellError;

/// How a child ended, decoded from its wait status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Exited(i32),
    Signaled(i32),
}

/// Launch `argv[0]` as a child process and block until it terminates.
///
/// The child replaces itself via `execvp`; if that fails it prints a
/// diagnostic naming the command and exits 127 without ever returning
/// into shell logic. A failed `fork` is fatal to the whole shell.
pub fn run(argv: &[String]) -> Result<ExitOutcome, ShellError> {
    let Some(name) = argv.first() else {
        return Ok(ExitOutcome::Exited(0));
    };

    let cmd = to_cstring(name)?;
    let args: Vec<CString> = argv
        .iter()
        .map(|a| to_cstring(a))
        .collect::<Result<_, _>>()?;
    let argp: Vec<*const c_char> = args
        .iter()
        .map(|a| a.as_ptr())
        .chain(std::iter::once(ptr::null()))
        .collect();

    match unsafe { fork() } {
        -1 => Err(ShellError::ChildCreationFailed(io::Error::last_os_error())),
        0 => {
            // Child: only reached again if the exec itself failed.
            unsafe { execvp(cmd.as_ptr(), argp.as_ptr()) };
            println!(
                "{} {}",
                Color::Red.bold().paint(" --- Error:"),
                ShellError::CommandNotFound(name.clone())
            );
            unsafe { libc::_exit(127) }
        }
        pid => {
            // Parent: wait for this child specifically.
            let mut status: libc::c_int = 0;
            loop {
                let reaped = unsafe { waitpid(pid, &mut status, 0) };
                if reaped == pid {
                    break;
                }
                if reaped == -1 {
                    let err = io::Error::last_os_error();
                    if err.kind() == io::ErrorKind::Interrupted {
                        continue;
                    }
                    break;
                }
            }
            Ok(decode_status(status))
        }
    }
}

fn to_cstring(arg: &str) -> Result<CString, ShellError> {
    CString::new(arg).map_err(|_| ShellError::CommandNotFound(arg.to_string()))
}

fn decode_status(status: libc::c_int) -> ExitOutcome {
    if libc::WIFEXITED(status) {
        ExitOutcome::Exited(libc::WEXITSTATUS(status))
    } else if libc::WIFSIGNALED(status) {
        ExitOutcome::Signaled(libc::WTERMSIG(status))
    } else {
        ExitOutcome::Exited(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn reports_the_child_exit_status() {
        let outcome = run(&argv(&["sh", "-c", "exit 3"])).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(3));
    }

    #[test]
    fn successful_command_exits_zero() {
        let outcome = run(&argv(&["true"])).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(0));
    }

    #[test]
    fn unknown_command_is_confined_to_the_child() {
        // the shell survives; only the child exits, with 127
        let outcome = run(&argv(&["totally_bogus_cmd123"])).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(127));
    }

    #[test]
    fn empty_argv_is_a_no_op() {
        assert_eq!(run(&[]).unwrap(), ExitOutcome::Exited(0));
    }

    #[test]
    fn interior_nul_is_rejected_before_forking() {
        let err = run(&argv(&["bad\0name"])).unwrap_err();
        assert!(matches!(err, ShellError::CommandNotFound(_)));
    }
}

mod alias;
mod builtins;
mod error;
mod parse;
mod process_exec;
mod prompt;
mod reader;
mod shell;

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use nu_ansi_term::Color;
use reedline::Reedline;

use crate::alias::AliasTable;
use crate::prompt::NshPrompt;
use crate::reader::LineResult;
use crate::shell::Flow;

// Set by the SIGINT handler, drained by the loop. The handler itself
// must stay async-signal-safe, so all terminal output happens here.
static SIGINT_SEEN: AtomicBool = AtomicBool::new(false);

extern "C" fn on_sigint(_sig: libc::c_int) {
    SIGINT_SEEN.store(true, Ordering::Relaxed);
}

fn install_sigint_handler() -> io::Result<()> {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = on_sigint as libc::sighandler_t;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&mut sa.sa_mask);
        if libc::sigaction(libc::SIGINT, &sa, std::ptr::null_mut()) == -1 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // [1] Load the alias table, creating ~/.nsh_alias on first run
    let home = dirs::home_dir().context("HOME directory not found")?;
    let aliases = AliasTable::load(&home.join(".nsh_alias"))?;

    // [2] Ctrl+C must never kill the shell itself
    install_sigint_handler().context("failed to install SIGINT handler")?;

    // [3] Build the prompt and line editor
    let prompt = NshPrompt::new();
    let mut editor = Reedline::create();

    // [4] Read-eval loop: read, expand, tokenize, dispatch
    loop {
        if SIGINT_SEEN.swap(false, Ordering::Relaxed) {
            // erase the "^C" the terminal echoed
            print!("\u{8}\u{8}  \u{8}\u{8}");
            let _ = io::stdout().flush();
        }

        match reader::read_line(&mut editor, &prompt) {
            Ok(LineResult::Line(line)) => {
                let expanded = match parse::expand(&aliases, &line) {
                    Ok(expanded) => expanded,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };
                let tokens = match parse::tokenize(&expanded) {
                    Ok(tokens) => tokens,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };
                match shell::exec(&tokens, &aliases) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) if e.is_fatal() => return Err(e.into()),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Ok(LineResult::EndOfInput) => {
                println!("{}", Color::Green.bold().paint("Buh bye."));
                break;
            }
            Ok(LineResult::Interrupted) => {}
            Ok(LineResult::Failed(e)) => eprintln!("read error: {e}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

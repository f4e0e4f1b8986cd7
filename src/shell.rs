use crate::alias::AliasTable;
use crate::builtins;
use crate::error::ShellError;
use crate::process_exec;

/// What the first token of a line resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Empty,
    Cd,
    Alias,
    Exit,
    Help,
    External,
}

/// Whether the loop keeps going after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn classify(word: &str) -> Builtin {
    match word {
        "" => Builtin::Empty,
        "cd" | "chdir" => Builtin::Cd,
        "alias" => Builtin::Alias,
        "exit" | "logout" | "quit" | ":q" => Builtin::Exit,
        "help" | "halp" => Builtin::Help,
        _ => Builtin::External,
    }
}

/// Route one tokenized line to a builtin or to the process launcher.
pub fn exec(tokens: &[String], aliases: &AliasTable) -> Result<Flow, ShellError> {
    let Some(word) = tokens.first() else {
        return Ok(Flow::Continue);
    };

    match classify(word) {
        Builtin::Empty => Ok(Flow::Continue),
        Builtin::Cd => {
            builtins::cd(&tokens[1..])?;
            Ok(Flow::Continue)
        }
        Builtin::Alias => {
            builtins::alias(aliases, &tokens[1..]);
            Ok(Flow::Continue)
        }
        Builtin::Exit => Ok(Flow::Exit),
        Builtin::Help => {
            builtins::help();
            Ok(Flow::Continue)
        }
        Builtin::External => {
            // the loop does not use the child's exit status
            process_exec::run(tokens)?;
            Ok(Flow::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn classifies_every_builtin_name() {
        assert_eq!(classify(""), Builtin::Empty);
        assert_eq!(classify("cd"), Builtin::Cd);
        assert_eq!(classify("chdir"), Builtin::Cd);
        assert_eq!(classify("alias"), Builtin::Alias);
        assert_eq!(classify("exit"), Builtin::Exit);
        assert_eq!(classify("logout"), Builtin::Exit);
        assert_eq!(classify("quit"), Builtin::Exit);
        assert_eq!(classify(":q"), Builtin::Exit);
        assert_eq!(classify("help"), Builtin::Help);
        assert_eq!(classify("halp"), Builtin::Help);
        assert_eq!(classify("grep"), Builtin::External);
    }

    #[test]
    fn empty_token_is_a_no_op() {
        let table = AliasTable::default();
        let flow = exec(&tokens(&[""]), &table).unwrap();
        assert_eq!(flow, Flow::Continue);
    }

    #[test]
    fn quit_words_stop_the_loop() {
        let table = AliasTable::default();
        for word in ["exit", "logout", "quit", ":q"] {
            assert_eq!(exec(&tokens(&[word]), &table).unwrap(), Flow::Exit);
        }
    }

    #[test]
    fn external_commands_keep_the_loop_alive() {
        let table = AliasTable::default();
        let flow = exec(&tokens(&["true"]), &table).unwrap();
        assert_eq!(flow, Flow::Continue);
    }
}

use std::{env, thread, time::Duration};

use nu_ansi_term::Style;

use crate::alias::{Alias, AliasTable};
use crate::error::ShellError;

/// Change the working directory.
///
/// A leading `~` in the argument is replaced with the home directory;
/// no argument means go home. Failure is reported to the caller and the
/// loop carries on.
pub fn cd(args: &[String]) -> Result<(), ShellError> {
    let home = home_dir_string();
    let target = cd_target(args, &home);
    env::set_current_dir(&target).map_err(|e| ShellError::DirectoryChangeFailed {
        path: target,
        source: e,
    })
}

fn cd_target(args: &[String], home: &str) -> String {
    match args.first() {
        Some(arg) => expand_tilde(arg, home),
        None => home.to_string(),
    }
}

// Literal first-character rewrite: "~whatever" becomes home + "whatever".
fn expand_tilde(path: &str, home: &str) -> String {
    match path.strip_prefix('~') {
        Some(rest) => format!("{home}{rest}"),
        None => path.to_string(),
    }
}

fn home_dir_string() -> String {
    dirs::home_dir()
        .map(|p| p.display().to_string())
        .or_else(|| env::var("HOME").ok())
        .unwrap_or_default()
}

/// The `alias` builtin: print one alias by name, or all of them.
pub fn alias(aliases: &AliasTable, args: &[String]) {
    match args.first() {
        Some(name) => {
            if let Some(found) = aliases.find_exact(name) {
                print_alias(found);
            }
        }
        None => {
            for entry in aliases.iter() {
                print_alias(entry);
            }
        }
    }
}

fn print_alias(alias: &Alias) {
    println!(
        "{} {}",
        Style::new().bold().paint(format!("{}:", alias.name)),
        alias.expansion
    );
}

pub fn help() {
    println!("\t     \"Nameless shell..\"");
    println!("    (>^.^)>  __/");
    thread::sleep(Duration::from_secs(1));
    println!("\t       \\");
    println!("\t   \".. also a helpless shell!\"");
}

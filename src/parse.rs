use crate::alias::AliasTable;
use crate::error::ShellError;
use crate::reader::check_line_len;

/// Most arguments one command may carry.
pub const MAX_TOKENS: usize = 64;

// Appended to anything that starts with "ls". The match is a plain
// prefix check, so "lsof" picks it up too; that behavior is kept as is.
const COLOR_FLAG: &str = " --color";

/// Rewrite a raw line before tokenization.
///
/// Step 1: if the whole trimmed line equals an alias name, the line
/// becomes that alias's expansion.
/// Step 2: if the (possibly substituted) line starts with `ls`, the
/// ` --color` flag is appended.
///
/// Both rewrites are length-checked against the line capacity.
pub fn expand(aliases: &AliasTable, line: &str) -> Result<String, ShellError> {
    let mut out = match aliases.find_full_line(line) {
        Some(alias) => alias.expansion.clone(),
        None => line.to_string(),
    };
    check_line_len(&out)?;

    if out.starts_with("ls") {
        check_line_len(&format!("{out}{COLOR_FLAG}"))?;
        out.push_str(COLOR_FLAG);
    }
    Ok(out)
}

/// Split a line on spaces and tabs.
///
/// Consecutive delimiters yield empty-string tokens and an empty line
/// yields exactly one empty token; the dispatcher treats those as
/// "no command". More than `MAX_TOKENS` tokens rejects the line.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let tokens: Vec<String> = line.split([' ', '\t']).map(str::to_string).collect();
    if tokens.len() > MAX_TOKENS {
        return Err(ShellError::TooManyArguments);
    }
    Ok(tokens)
}

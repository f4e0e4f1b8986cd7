use std::{borrow::Cow, env};

use nu_ansi_term::Color;
use reedline::{Prompt, PromptEditMode, PromptHistorySearch};

// Longest cwd shown before the middle gets elided.
const CWD_MAX: usize = 48;

/// The `user@host cwd > ` prompt. Identity is resolved once at startup;
/// the working directory is re-read on every render.
pub struct NshPrompt {
    user: String,
    host: String,
    home: String,
}

impl NshPrompt {
    pub fn new() -> Self {
        Self {
            user: env::var("USER")
                .or_else(|_| env::var("LOGNAME"))
                .unwrap_or_else(|_| "nobody".to_string()),
            host: hostname(),
            home: dirs::home_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}

fn hostname() -> String {
    let mut buf = [0u8; 64];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc == 0 {
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        String::from_utf8_lossy(&buf[..end]).into_owned()
    } else {
        "localhost".to_string()
    }
}

/// Collapse the home prefix to `~`, then keep only the last `CWD_MAX`
/// characters behind a ".." marker when the path is too long.
pub fn shorten_cwd(cwd: &str, home: &str) -> String {
    let path = if !home.is_empty() && cwd.starts_with(home) {
        format!("~{}", &cwd[home.len()..])
    } else {
        cwd.to_string()
    };

    let count = path.chars().count();
    if count > CWD_MAX {
        let tail: String = path.chars().skip(count - CWD_MAX).collect();
        format!("..{tail}")
    } else {
        path
    }
}

impl Prompt for NshPrompt {
    fn render_prompt_left(&self) -> Cow<'static, str> {
        let cwd = env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "?".to_string());
        let cwd = shorten_cwd(&cwd, &self.home);

        Cow::Owned(format!(
            "{} {} {} ",
            Color::Green
                .bold()
                .paint(format!("{}@{}", self.user, self.host)),
            Color::Blue.bold().paint(cwd),
            Color::Cyan.bold().paint(">"),
        ))
    }

    fn render_prompt_right(&self) -> Cow<'static, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _mode: PromptEditMode) -> Cow<'static, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'static, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'static, str> {
        Cow::Borrowed("? ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_prefix_collapses_to_tilde() {
        assert_eq!(
            shorten_cwd("/home/alice/projects", "/home/alice"),
            "~/projects"
        );
        assert_eq!(shorten_cwd("/home/alice", "/home/alice"), "~");
    }

    #[test]
    fn paths_outside_home_are_untouched() {
        assert_eq!(shorten_cwd("/etc/nginx", "/home/alice"), "/etc/nginx");
    }

    #[test]
    fn long_paths_keep_only_the_tail() {
        let cwd = format!("/srv/{}", "d/".repeat(40));
        let short = shorten_cwd(&cwd, "/home/alice");
        assert!(short.starts_with(".."));
        assert_eq!(short.chars().count(), CWD_MAX + 2);
        assert!(cwd.ends_with(short.trim_start_matches("..")));
    }

    #[test]
    fn short_paths_are_not_elided() {
        assert_eq!(shorten_cwd("/tmp", ""), "/tmp");
    }
}

//! Console output helpers
//!
//! Status icons with ASCII fallbacks and optional coloring. Capability
//! detection honors `NO_COLOR`, dumb terminals, CI environments, and the
//! `--color` flag, so pipeline logs stay plain while local runs get the
//! decorated output.

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

/// When to use colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => "✓",
            (true, Icon::Error) => "✗",
            (true, Icon::Warning) => "⚠",
            (false, Icon::Success) => "[OK]",
            (false, Icon::Error) => "[FAIL]",
            (false, Icon::Warning) => "[WARN]",
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => Color::Green,
            Icon::Error => Color::Red,
            Icon::Warning => Color::Yellow,
        };
        format!("{}", s.with(color))
    }
}

/// Resolved output capabilities for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub unicode: bool,
}

impl Style {
    pub fn detect(when: ColorWhen) -> Self {
        detect_impl(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
            when,
        )
    }

    /// An icon-prefixed status line
    pub fn status(&self, icon: Icon, message: &str) -> String {
        format!("{} {}", icon.colored(self.color, self.unicode), message)
    }
}

fn detect_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    when: ColorWhen,
) -> Style {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let color = match when {
        ColorWhen::Never => false,
        ColorWhen::Always => true,
        ColorWhen::Auto => {
            is_tty
                && !term_is_dumb
                && get_env("NO_COLOR").is_none()
                && !is_ci_env(&get_env)
        }
    };

    Style {
        color,
        unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

    KEYS.iter().any(|k| {
        get_env(k)
            .map(|v| v.to_lowercase().contains("utf"))
            .unwrap_or(false)
    })
}

//! Ordered command-line arguments for the packager.
//!
//! Arguments keep track of which tokens were quoted so the same sequence
//! can be handed to a process runner as raw values and rendered for
//! display as a single command line. Values are kept as `OsString` so paths
//! reach the process byte for byte; only rendering is lossy.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// A single command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Emitted verbatim (verbs, flags, switches).
    Text(OsString),
    /// Emitted in double quotes when rendered (paths).
    Quoted(OsString),
}

impl Argument {
    /// The raw value, without rendering quotes.
    pub fn value(&self) -> &OsStr {
        match self {
            Self::Text(text) | Self::Quoted(text) => text,
        }
    }

    /// The argument as it appears on a rendered command line.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.to_string_lossy().into_owned(),
            Self::Quoted(text) => {
                format!("\"{}\"", text.to_string_lossy().replace('"', "\\\""))
            }
        }
    }
}

/// Builder for an ordered argument list.
///
/// # Example
///
/// ```
/// use appx_core::ProcessArguments;
///
/// let mut args = ProcessArguments::new();
/// args.append("pack").append("/p").append_quoted("C:/out/My App.appx");
/// args.append_switch(true, "o");
///
/// assert_eq!(args.tokens(), vec!["pack", "/p", "C:/out/My App.appx", "/o"]);
/// assert_eq!(args.render(), "pack /p \"C:/out/My App.appx\" /o");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArguments {
    arguments: Vec<Argument>,
}

impl ProcessArguments {
    /// Create an empty argument list.
    pub const fn new() -> Self {
        Self {
            arguments: Vec::new(),
        }
    }

    /// Append a verbatim token.
    pub fn append(&mut self, text: impl Into<OsString>) -> &mut Self {
        self.arguments.push(Argument::Text(text.into()));
        self
    }

    /// Append a token that is quoted when rendered.
    pub fn append_quoted(&mut self, text: impl Into<OsString>) -> &mut Self {
        self.arguments.push(Argument::Quoted(text.into()));
        self
    }

    /// Append `/<name>` when `include` is set.
    pub fn append_switch(&mut self, include: bool, name: &str) -> &mut Self {
        if include {
            self.append(format!("/{name}"));
        }
        self
    }

    /// Append a flag followed by a quoted path.
    pub fn append_path(&mut self, flag: &str, path: &Path) -> &mut Self {
        self.append(flag).append_quoted(path.as_os_str())
    }

    /// Raw token values in order, suitable for `Command::args`.
    pub fn tokens(&self) -> Vec<OsString> {
        self.arguments
            .iter()
            .map(|arg| arg.value().to_os_string())
            .collect()
    }

    /// Iterate over the arguments.
    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    /// Number of arguments.
    pub const fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether no arguments have been appended.
    pub const fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Whether a verbatim token equal to `text` is present.
    pub fn contains(&self, text: &str) -> bool {
        self.arguments
            .iter()
            .any(|arg| matches!(arg, Argument::Text(t) if t == text))
    }

    /// Render the arguments as a single command line.
    pub fn render(&self) -> String {
        self.arguments
            .iter()
            .map(Argument::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProcessArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a ProcessArguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Filename pattern rules for resolving logical tool names.

/// Logical name of the Python interpreter itself.
pub const PYTHON_PROGRAM: &str = "python";

/// Ordered filename patterns tried for a logical tool name.
///
/// The interpreter gets its own rule: Windows installations ship a
/// GUI-suppressing `w<name>.exe` variant alongside the console binary, and
/// that variant exists only for the interpreter, never for auxiliary tools
/// such as `pip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingRule {
    /// Rule for the interpreter's own logical name.
    Interpreter,
    /// Rule for every other tool name.
    Generic,
}

impl NamingRule {
    /// Select the rule for a logical tool name.
    #[must_use]
    pub fn for_tool(name: &str) -> Self {
        if name == PYTHON_PROGRAM {
            Self::Interpreter
        } else {
            Self::Generic
        }
    }

    /// Candidate filenames for `name`, in priority order.
    #[must_use]
    pub fn candidates(self, name: &str) -> Vec<String> {
        match self {
            Self::Interpreter => vec![
                name.to_owned(),
                format!("w{name}.exe"),
                format!("{name}.exe"),
            ],
            Self::Generic => vec![name.to_owned(), format!("{name}.exe")],
        }
    }
}

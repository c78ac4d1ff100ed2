/// Result of offering clipboard text to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// An Active Link is already set; nothing was examined.
    Skipped,
    /// A confirmation prompt is already open for another probe.
    AlreadyPrompting,
    /// The clipboard holds no forms link.
    NoMatch,
    /// An automatic probe found the link the user last declined or closed.
    Dismissed,
    /// Ask the user whether to open this link.
    Prompt(String),
}

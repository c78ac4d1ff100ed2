/// What caused a clipboard probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTrigger {
    /// Startup or a return to the foreground.
    Automatic,
    /// The user asked to check the clipboard now.
    Manual,
}

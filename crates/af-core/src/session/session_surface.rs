/// What the embedded browsing surface needs to open a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSurface {
    pub url: String,
    pub script: String,
}

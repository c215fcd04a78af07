/// knobs for a single parse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// stop caring once the metadata is read. timing points and hit objects are skipped
    pub metadata_only: bool,
}
impl ParseOptions {
    pub fn metadata_only() -> Self {
        Self { metadata_only: true }
    }
}

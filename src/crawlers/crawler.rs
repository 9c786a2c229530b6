use crate::error::Result;

/// Where page HTML comes from: a live browser or saved files.
///
/// Items are handled strictly one at a time, in list order.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fetches the HTML for one item.
    ///
    /// `Ok(None)` skips the item and the run continues; `Err` stops the
    /// remaining queue.
    async fn fetch(&mut self, item: &str) -> Result<Option<String>>;

    /// Releases whatever the source holds. Called once on every exit path.
    async fn shutdown(&mut self) {}
}

/// Sink for the human-readable run log and the final status.
pub trait Reporter {
    fn info(&self, message: &str);

    /// Hidden by the runner unless step debug logging is enabled.
    fn debug(&self, message: &str);

    /// Mark the run as failed.
    fn fail(&self, message: &str);
}

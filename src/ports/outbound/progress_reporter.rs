/// ProgressReporter port for user-facing diagnostics
///
/// All status output goes through here (to stderr in the CLI) so stdout
/// carries nothing but the manifest.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports per-record progress
    ///
    /// # Arguments
    /// * `current` - Records processed so far
    /// * `total` - Total records expected
    /// * `message` - Optional detail, e.g. the ecosystem being formatted
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}

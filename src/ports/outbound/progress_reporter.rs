/// ProgressReporter port for user feedback during a run
///
/// Status lines and non-fatal warnings (such as unknown index fields) go
/// through this port so they never mix with generated output.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through the requested packages
    ///
    /// # Arguments
    /// * `current` - Packages finished so far
    /// * `total` - Packages requested
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal warning
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}

// src/progress.rs
/// Progress sink for the data and image runs.
/// The GUI writes it into the status line, the CLI prints it.
pub trait Progress {
    /// Number of units the run will visit.
    fn begin(&mut self, _total: usize) {}

    fn log(&mut self, _msg: &str) {}

    /// One unit (species page, model image set) finished.
    fn item_done(&mut self, _what: &str) {}

    /// One unit was skipped after a failure.
    fn item_failed(&mut self, _what: &str) {}

    /// End of the run, whether or not it succeeded.
    fn finish(&mut self) {}
}

/// Text rendering of results and history.
pub mod analysis_printer;
/// Progress spinner.
pub mod animated_logger;

/// Console adapters for progress output and the report table
mod progress_reporter;
mod table_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use table_presenter::ConsoleTablePresenter;

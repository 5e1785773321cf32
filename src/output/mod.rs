//! Output formatting for CLI results

pub mod secrets;
pub mod table;

pub use secrets::render_secrets;
pub use table::TablePrinter;

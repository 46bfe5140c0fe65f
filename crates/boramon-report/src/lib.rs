pub mod compat;
pub mod error;
pub mod io;
pub mod report;
pub mod suggest;
pub mod summary;

pub use compat::load_report;
pub use error::ReportError;
pub use report::{COLUMNS, ReportRow, assemble};
pub use suggest::{KeywordSuggestion, suggest_keywords};
pub use summary::Summary;

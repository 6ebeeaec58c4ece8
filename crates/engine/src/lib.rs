//! CryptoPrice Engine - Snapshot analysis, display formatting, views, and export

pub mod analysis;
pub mod export;
pub mod format;
pub mod view;

pub use analysis::analyze;
pub use export::{file_name, to_csv, to_xlsx, ExportFormat};
pub use format::format_rows;
pub use view::{coin_names, filter_by_names, sort_by_metric};

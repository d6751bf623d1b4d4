//! CSV export of daily logs and stops.

mod export;

pub use export::{export_segments_csv, export_stops_csv, write_segments_csv, write_stops_csv};

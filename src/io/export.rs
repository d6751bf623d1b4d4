//! CSV export for daily log segments and map stops.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::{DailyLog, Stop};

const SEGMENTS_HEADER: &str = "day,date,status,start,end,note";
const STOPS_HEADER: &str = "type,location,lat,lng,time,day,duration_hrs";

/// Exports every segment of every daily log to a CSV file, one row per
/// segment, in day order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_segments_csv(logs: &[DailyLog], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_segments_csv(logs, io::BufWriter::new(file))
}

/// Writes every segment of every daily log as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_segments_csv(logs: &[DailyLog], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SEGMENTS_HEADER.split(','))?;

    for log in logs {
        for seg in &log.segments {
            wtr.write_record(&[
                log.day.to_string(),
                log.date.to_string(),
                seg.status.to_string(),
                format!("{:.2}", seg.start),
                format!("{:.2}", seg.end),
                seg.note.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the trip's map stops to a CSV file, one row per stop, in visit
/// order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_stops_csv(stops: &[Stop], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_stops_csv(stops, io::BufWriter::new(file))
}

/// Writes the trip's map stops as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_stops_csv(stops: &[Stop], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(STOPS_HEADER.split(','))?;

    for stop in stops {
        wtr.write_record(&[
            stop.stop_type.to_string(),
            stop.location.clone(),
            format!("{:.4}", stop.lat),
            format!("{:.4}", stop.lng),
            stop.time.clone(),
            stop.day.to_string(),
            stop.duration_hrs.map(|d| format!("{d:.2}")).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}



//! Loading carriers and jobs from comma-separated files.
//!
//! Both formats start with one header line, which is skipped. Fields are
//! split on commas without quoting support and trimmed.
//!
//! Trucks: `truck,city,state,lat,lng`
//!
//! Cargo: `product,origin_city,origin_state,origin_lat,origin_lng,destination_city,destination_state,destination_lat,destination_lng`

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::RecordError;
use crate::models::{Carrier, Job, Position};
use crate::priority::PrioritySource;

const TRUCK_FIELDS: usize = 5;
const CARGO_FIELDS: usize = 9;

/// Reads trucks, drawing each carrier's priority from `priorities`.
///
/// # Examples
///
/// ```
/// use u_assign::priority::FixedPriority;
/// use u_assign::records::read_carriers;
///
/// let csv = "truck,city,state,lat,lng\nApples,Lenapah,OK,30.876719,-95.876719\n";
/// let carriers = read_carriers(csv.as_bytes(), &mut FixedPriority::new(1)).unwrap();
/// assert_eq!(carriers.len(), 1);
/// assert_eq!(carriers[0].home().label(), "Lenapah, OK");
/// ```
///
/// # Errors
///
/// [`RecordError`] on I/O failure, a wrong field count, or a bad coordinate.
pub fn read_carriers<R, S>(reader: R, priorities: &mut S) -> Result<Vec<Carrier>, RecordError>
where
    R: BufRead,
    S: PrioritySource + ?Sized,
{
    let mut carriers = Vec::new();
    for_each_record(reader, TRUCK_FIELDS, |line, fields| {
        let home = position(line, &fields[1..5])?;
        carriers.push(Carrier::from_source(fields[0], home, &mut *priorities));
        Ok(())
    })?;
    debug!(count = carriers.len(), "read trucks");
    Ok(carriers)
}

/// Reads cargoes.
///
/// # Errors
///
/// [`RecordError`] on I/O failure, a wrong field count, or a bad coordinate.
pub fn read_jobs<R: BufRead>(reader: R) -> Result<Vec<Job>, RecordError> {
    let mut jobs = Vec::new();
    for_each_record(reader, CARGO_FIELDS, |line, fields| {
        let origin = position(line, &fields[1..5])?;
        let destination = position(line, &fields[5..9])?;
        jobs.push(Job::new(fields[0], origin, destination));
        Ok(())
    })?;
    debug!(count = jobs.len(), "read cargoes");
    Ok(jobs)
}

/// Opens `path` and reads trucks from it.
///
/// # Errors
///
/// See [`read_carriers`].
pub fn load_carriers<S>(
    path: impl AsRef<Path>,
    priorities: &mut S,
) -> Result<Vec<Carrier>, RecordError>
where
    S: PrioritySource + ?Sized,
{
    let file = File::open(path)?;
    read_carriers(BufReader::new(file), priorities)
}

/// Opens `path` and reads cargoes from it.
///
/// # Errors
///
/// See [`read_jobs`].
pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<Job>, RecordError> {
    let file = File::open(path)?;
    read_jobs(BufReader::new(file))
}

fn for_each_record<R, F>(reader: R, expected: usize, mut handle: F) -> Result<(), RecordError>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<(), RecordError>,
{
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != expected {
            return Err(RecordError::FieldCount {
                line: idx + 1,
                expected,
                found: fields.len(),
            });
        }
        handle(idx + 1, &fields)?;
    }
    Ok(())
}

/// `[city, region, lat, lng]` to a position.
fn position(line: usize, fields: &[&str]) -> Result<Position, RecordError> {
    let latitude = coordinate(line, "latitude", fields[2])?;
    let longitude = coordinate(line, "longitude", fields[3])?;
    let mut position = Position::new(latitude, longitude, fields[0]);
    if !fields[1].is_empty() {
        position = position.with_region(fields[1]);
    }
    Ok(position)
}

fn coordinate(line: usize, field: &'static str, value: &str) -> Result<f64, RecordError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RecordError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
        }),
    }
}

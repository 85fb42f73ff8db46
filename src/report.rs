//! Human- and machine-readable rendering of a solved assignment.

use std::fmt;

use serde::Serialize;

use crate::models::{Assignment, AssignmentProblem};

/// One served cargo in a report. Indices are 1-based, as printed.
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    pub cargo: usize,
    pub product: String,
    pub truck: usize,
    pub truck_name: String,
    pub origin: String,
    pub destination: String,
    pub pickup_distance: f64,
    pub fixed_distance: f64,
    /// Pickup plus fixed leg.
    pub distance: f64,
}

/// A solved assignment joined with the names and places of its problem.
///
/// `Display` renders the console text:
///
/// ```text
/// Total distance traveled is 1,621.57 km.
/// Cargo 1 with Light bulbs is transported by truck 1 with name Hartford ... traveling 1,621.57 km.
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentReport {
    pub total_distance: f64,
    pub pickup_distance: f64,
    pub fixed_distance: f64,
    pub lines: Vec<ReportLine>,
}

impl AssignmentReport {
    /// Builds the report for an assignment solved from `problem`.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` refers to carriers or jobs that `problem` does not have.
    pub fn new(problem: &AssignmentProblem, assignment: &Assignment) -> Self {
        let lines = assignment
            .pairs()
            .map(|(job_idx, carrier_idx)| {
                let job = &problem.jobs()[job_idx];
                let carrier = &problem.carriers()[carrier_idx];
                let pickup = assignment
                    .pickup_distance_for(job_idx)
                    .unwrap_or_else(|| carrier.home().distance_to(job.origin()));
                ReportLine {
                    cargo: job_idx + 1,
                    product: job.name().to_string(),
                    truck: carrier_idx + 1,
                    truck_name: carrier.name().to_string(),
                    origin: job.origin().label(),
                    destination: job.destination().label(),
                    pickup_distance: pickup,
                    fixed_distance: job.fixed_distance(),
                    distance: pickup + job.fixed_distance(),
                }
            })
            .collect();

        Self {
            total_distance: assignment.total_distance(),
            pickup_distance: assignment.pickup_distance(),
            fixed_distance: assignment.fixed_distance(),
            lines,
        }
    }
}

impl fmt::Display for AssignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total distance traveled is {} km.",
            format_km(self.total_distance)
        )?;
        for line in &self.lines {
            writeln!(
                f,
                "Cargo {} with {} is transported by truck {} with name {} traveling {} km.",
                line.cargo,
                line.product,
                line.truck,
                line.truck_name,
                format_km(line.distance)
            )?;
        }
        Ok(())
    }
}

/// Two decimals with comma thousands separators, e.g. `12,345.68`.
pub fn format_km(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

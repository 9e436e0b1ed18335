use crate::domain::allocation::{Assignment, OrderOutcome};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 6] = ["order", "status", "option", "method", "discount", "points"];

#[derive(Serialize)]
struct AssignmentRow<'a> {
    order: &'a str,
    status: &'static str,
    option: Option<&'static str>,
    method: Option<&'a str>,
    discount: Option<String>,
    points: Option<String>,
}

/// Writes one CSV row per decided order, in processing order.
pub struct AssignmentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AssignmentWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(destination);
        Self { writer }
    }

    /// Writes the header, then one row per assignment. The header is written
    /// even when there are no assignments.
    pub fn write_assignments(
        &mut self,
        assignments: &[Assignment],
        points_method_id: &str,
    ) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for assignment in assignments {
            let row = match &assignment.outcome {
                OrderOutcome::Committed(option) => AssignmentRow {
                    order: &assignment.order_id,
                    status: "committed",
                    option: Some(option.kind.label()),
                    method: Some(option.method_id(points_method_id)),
                    discount: Some(option.discount.to_string()),
                    points: Some(option.points_used.to_string()),
                },
                OrderOutcome::Unpaid => AssignmentRow {
                    order: &assignment.order_id,
                    status: "unpaid",
                    option: None,
                    method: None,
                    discount: None,
                    points: None,
                },
            };
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

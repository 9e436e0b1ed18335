use crate::domain::catalog::MethodUsage;
use crate::error::Result;
use std::io::Write;

/// Writes `<method-id> <amount>` lines for every method that was charged.
pub struct UsageWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> UsageWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(destination);
        Self { writer }
    }

    /// Writes usage in the order given, skipping methods that spent nothing.
    pub fn write_usage(&mut self, usage: &[MethodUsage]) -> Result<()> {
        for entry in usage.iter().filter(|u| !u.spent.is_zero()) {
            self.writer
                .write_record([entry.method_id.as_str(), entry.spent.to_string().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

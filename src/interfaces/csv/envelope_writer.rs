use crate::application::checkout::PaymentForm;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 6] = [
    "order_id",
    "transaction_reference",
    "url",
    "Data",
    "InterfaceVersion",
    "Seal",
];

/// Writes sealed payment forms as CSV, one row per order.
pub struct EnvelopeWriter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> EnvelopeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            header_written: false,
        }
    }

    pub fn write_form(&mut self, order_id: &str, form: &PaymentForm) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(HEADER)?;
            self.header_written = true;
        }
        self.writer.write_record([
            order_id,
            form.transaction_reference.as_str(),
            form.url.as_str(),
            form.envelope.data.as_str(),
            form.envelope.interface_version.as_str(),
            form.envelope.seal.as_str(),
        ])?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(HEADER)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

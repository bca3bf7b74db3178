use crate::domain::order::Order;
use crate::error::{MercanetError, Result};
use std::io::Read;

/// Reads orders from a CSV source with an
/// `order_id,total,currency,email,language` header.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MercanetError::from))
    }
}

use crate::domain::product::Product;
use crate::error::Result;
use std::io::Write;

/// Writes products as `name,price` CSV, header first.
pub struct CatalogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CatalogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_products<I>(&mut self, products: I) -> Result<()>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut wrote_any = false;
        for product in products {
            self.writer.serialize(product)?;
            wrote_any = true;
        }
        // serialize() only emits the header alongside the first record
        if !wrote_any {
            self.writer.write_record(["name", "price"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

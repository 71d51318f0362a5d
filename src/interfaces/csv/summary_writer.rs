use crate::domain::settlement::SettlementSummary;
use crate::error::Result;
use std::io::Write;

/// Renders a settlement summary as CSV.
///
/// One row per line item under a `sku,name,price,count,amount` header,
/// followed by the addresses and a `total_count,total_amount,freight,payment_amount`
/// block. Amounts always carry two decimals.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(sink);
        Self { writer }
    }

    pub fn write_summary(&mut self, summary: &SettlementSummary, selected_address: usize) -> Result<()> {
        self.writer
            .write_record(["sku", "name", "price", "count", "amount"])?;
        for sku in &summary.skus {
            let amount = sku.amount.unwrap_or_else(|| sku.line_amount());
            self.writer.write_record([
                sku.id.to_string(),
                sku.name.clone().unwrap_or_default(),
                sku.price.to_string(),
                sku.count.to_string(),
                amount.to_string(),
            ])?;
        }

        self.writer.write_record(["address", "selected", "label"])?;
        for (index, address) in summary.addresses.iter().enumerate() {
            let selected = if index == selected_address { "*" } else { "" };
            self.writer
                .write_record([index.to_string(), selected.to_string(), address.label()])?;
        }

        self.writer
            .write_record(["total_count", "total_amount", "freight", "payment_amount"])?;
        self.writer.write_record([
            summary.total_count.to_string(),
            summary.total_amount.to_string(),
            summary.freight.to_string(),
            summary.payment_amount.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}

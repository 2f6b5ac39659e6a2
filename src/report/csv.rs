use crate::input::PredictionTable;
use crate::pipeline::stage3_reduce::ShipmentRow;

pub fn projected_csv_bytes(
    table: &PredictionTable,
    shipments: &[ShipmentRow],
    columns: &[String],
) -> std::io::Result<Vec<u8>> {
    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(columns)
        .map_err(std::io::Error::other)?;
    for shipment in shipments {
        let record: Vec<String> = indices
            .iter()
            .map(|&col| table.cell(shipment.row, col).render())
            .collect();
        writer.write_record(&record).map_err(std::io::Error::other)?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))
}

// src/common/export.rs

use crate::common::error::AppError;

// Uma linha exportável da tabela (botão "Exportar" das listagens).
pub trait CsvExport {
    fn csv_headers() -> &'static [&'static str];
    fn csv_row(&self) -> Vec<String>;
}

pub fn to_csv<T: CsvExport>(rows: &[T]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::csv_headers())?;
    for row in rows {
        writer.write_record(row.csv_row())?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("Falha ao finalizar o CSV: {}", e)))
}

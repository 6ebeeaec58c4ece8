//! CSV and XLSX serialization of display rows

use chrono::NaiveDate;
use cryptoprice_core::{DisplayRow, Error, Result, DISPLAY_HEADERS};
use tracing::debug;

// Spreadsheet tools use the BOM to detect the encoding
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const XLSX_SHEET_NAME: &str = "Criptomoedas";
const EXPORT_BASE_NAME: &str = "CryptoPrice_Tabela";

/// Export container formats offered by the table view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// MIME type for the download response
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// Download file name: `CryptoPrice_Tabela_<YYYY-MM-DD>.<ext>`
///
/// The date is a parameter so the function stays pure; the shell passes
/// today's date.
pub fn file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_BASE_NAME,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

fn export_err(err: impl std::fmt::Display) -> Error {
    Error::ExportError(err.to_string())
}

/// Serialize rows as comma-separated UTF-8 with a leading BOM
///
/// The header row carries the fixed Portuguese labels in
/// [`DISPLAY_HEADERS`] order.
pub fn to_csv(rows: &[DisplayRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());

    writer.write_record(DISPLAY_HEADERS).map_err(export_err)?;
    for row in rows {
        writer.write_record(row.cells()).map_err(export_err)?;
    }

    let bytes = writer.into_inner().map_err(export_err)?;
    debug!("CSV export ready: {} rows, {} bytes", rows.len(), bytes.len());
    Ok(bytes)
}

/// Serialize rows as an XLSX workbook with one `Criptomoedas` worksheet
pub fn to_xlsx(rows: &[DisplayRow]) -> Result<Vec<u8>> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(XLSX_SHEET_NAME).map_err(export_err)?;

    for (col, header) in DISPLAY_HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(export_err)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, cell) in row.cells().iter().enumerate() {
            sheet
                .write_string(r as u32 + 1, col as u16, cell)
                .map_err(export_err)?;
        }
    }

    let bytes = workbook.save_to_buffer().map_err(export_err)?;
    debug!("XLSX export ready: {} rows, {} bytes", rows.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(name: &str) -> DisplayRow {
        DisplayRow {
            technical_id: name.to_lowercase(),
            symbol: name.to_lowercase(),
            name: name.to_string(),
            current_price: "1.234,50".to_string(),
            change_24h: "-2.57%".to_string(),
            market_cap: "1.000.000,00".to_string(),
            market_cap_rank: 1,
            total_volume: "500,00".to_string(),
            circulating_supply: "21.000.000".to_string(),
            ath: "2.000,00".to_string(),
            atl: "1,00".to_string(),
            last_updated: "2025-07-01 12:30:45".to_string(),
            current_price_value: 1234.5,
            change_24h_value: -2.57,
            circulating_supply_value: 21_000_000.0,
        }
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let bytes = to_csv(&[row("Bitcoin")]).unwrap();
        assert!(bytes.starts_with(&UTF8_BOM));

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), DISPLAY_HEADERS.join(","));
        assert!(lines.next().unwrap().starts_with("bitcoin,bitcoin,Bitcoin,"));
    }

    #[test]
    fn test_csv_one_line_per_row() {
        let rows = vec![row("Bitcoin"), row("Ethereum"), row("Solana")];
        let bytes = to_csv(&rows).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), rows.len() + 1);
    }

    #[test]
    fn test_xlsx_is_a_zip_container() {
        let bytes = to_xlsx(&[row("Bitcoin")]).unwrap();
        // XLSX is a zip archive: PK magic
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_file_name_carries_date_and_extension() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(
            file_name(ExportFormat::Csv, date),
            "CryptoPrice_Tabela_2025-07-01.csv"
        );
        assert_eq!(
            file_name(ExportFormat::Xlsx, date),
            "CryptoPrice_Tabela_2025-07-01.xlsx"
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Csv.mime(), "text/csv");
        assert_eq!(
            ExportFormat::Xlsx.mime(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }
}

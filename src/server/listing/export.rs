//! CSV export of listed records.
//!
//! Every cell, headers included, is double-quoted. Embedded quotes are doubled by
//! the csv writer so a field can never split into extra columns.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::server::model::{donation::Donation, member::Member};

/// Filename and bytes of a CSV download.
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One exported column: its header and how to render a record's cell.
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

/// Writes `records` as CSV with the given columns, in input order.
///
/// # Returns
/// - `Ok(Vec<u8>)` - UTF-8 CSV bytes, header row first
/// - `Err(csv::Error)` - Writer failed
pub fn export_csv<T>(records: &[T], columns: &[Column<T>]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header))?;
    for record in records {
        writer.write_record(columns.iter().map(|c| (c.value)(record)))?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

fn plain_amount(amount_sen: i64) -> String {
    format!("{}.{:02}", amount_sen / 100, amount_sen % 100)
}

pub fn member_columns() -> [Column<Member>; 6] {
    [
        Column {
            header: "Nama",
            value: |m| m.full_name.clone(),
        },
        Column {
            header: "No. KP",
            value: |m| m.ic_number.clone(),
        },
        Column {
            header: "Telefon",
            value: |m| m.phone_number.clone(),
        },
        Column {
            header: "Email",
            value: |m| m.email.clone().unwrap_or_else(|| "-".to_string()),
        },
        Column {
            header: "Alamat",
            value: |m| m.address.clone(),
        },
        Column {
            header: "Status",
            value: |m| m.status.label().to_string(),
        },
    ]
}

pub fn donation_columns() -> [Column<Donation>; 5] {
    [
        Column {
            header: "Tarikh",
            value: |d| d.date.format("%d/%m/%Y").to_string(),
        },
        Column {
            header: "Penderma",
            value: |d| d.donor_label().to_string(),
        },
        Column {
            header: "Jumlah",
            value: |d| plain_amount(d.amount_sen),
        },
        Column {
            header: "Kategori",
            value: |d| d.category.label().to_string(),
        },
        Column {
            header: "Kaedah Bayaran",
            value: |d| d.payment_method.label().to_string(),
        },
    ]
}

/// `ahli-masjid-yyyy-MM-dd.csv`
pub fn member_export_filename(today: NaiveDate) -> String {
    format!("ahli-masjid-{}.csv", today.format("%Y-%m-%d"))
}

/// `derma-dd-MM-yyyy.csv`
pub fn donation_export_filename(today: NaiveDate) -> String {
    format!("derma-{}.csv", today.format("%d-%m-%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::listing::record::test_support::donation;

    fn csv_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn quotes_every_cell_and_keeps_commas_inside_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut record = donation(1, 12_345, date);
        record.donor_name = Some("Ali, Abu dan Keluarga".to_string());

        let out = csv_text(export_csv(&[record], &donation_columns()).unwrap());

        assert_eq!(
            out,
            "\"Tarikh\",\"Penderma\",\"Jumlah\",\"Kategori\",\"Kaedah Bayaran\"\n\
             \"01/06/2025\",\"Ali, Abu dan Keluarga\",\"123.45\",\"Derma\",\"Tunai\"\n"
        );
    }

    #[test]
    fn doubles_embedded_quotes() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut record = donation(1, 100, date);
        record.donor_name = Some("Haji \"Pak\" Mat".to_string());

        let out = csv_text(export_csv(&[record], &donation_columns()).unwrap());

        assert!(out.contains("\"Haji \"\"Pak\"\" Mat\""));
    }

    #[test]
    fn keeps_input_order_and_anonymous_label() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut anonymous = donation(2, 5_000, date);
        anonymous.donor_name = None;
        let records = vec![donation(1, 100, date), anonymous];

        let out = csv_text(export_csv(&records, &donation_columns()).unwrap());
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"Penderma 1\""));
        assert!(lines[2].contains("\"Tanpa Nama\""));
        assert!(lines[2].contains("\"50.00\""));
    }

    #[test]
    fn names_export_files_by_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();

        assert_eq!(member_export_filename(today), "ahli-masjid-2025-01-09.csv");
        assert_eq!(donation_export_filename(today), "derma-09-01-2025.csv");
    }
}

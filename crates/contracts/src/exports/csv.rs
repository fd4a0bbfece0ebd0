use crate::projections::p300_sales_data::dto::SalesRecord;
use chrono::NaiveDate;

const HEADER: &str = "ID,Kategori,Ukuran,Jumlah Terjual,Total Harga";

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Assemble the sales-table CSV: header plus one quoted row per visible
/// record. Quantities export as whole units, prices with two decimals.
pub fn sales_csv(records: &[SalesRecord]) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for record in records {
        let fields = [
            record.id.to_string(),
            record.kategori.clone(),
            record.ukuran.clone(),
            format!("{:.0}", record.jumlah_terjual),
            format!("{:.2}", record.total_harga),
        ];
        let row: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// `data_penjualan_<YYYY-MM-DD>.csv`
pub fn sales_csv_filename(date: NaiveDate) -> String {
    format!("data_penjualan_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split one CSV line into unquoted fields, honoring `""` escapes.
    fn split_csv_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => {
                    fields.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn test_csv_round_trip() {
        let records = vec![SalesRecord {
            id: 1,
            kategori: "Standard".to_string(),
            ukuran: "S".to_string(),
            jumlah_terjual: 10.0,
            total_harga: 1000.0,
        }];
        let csv = sales_csv(&records);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(HEADER));

        let fields = split_csv_line(lines.next().unwrap());
        assert_eq!(fields, vec!["1", "Standard", "S", "10", "1000.00"]);
        assert_eq!(fields[0].parse::<i64>().unwrap(), 1);
        assert!((fields[3].parse::<f64>().unwrap() - 10.0).abs() < 1e-9);
        assert!((fields[4].parse::<f64>().unwrap() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_csv_escapes_embedded_quotes_and_commas() {
        let records = vec![SalesRecord {
            id: 7,
            kategori: "Custom \"Jumbo\", besar".to_string(),
            ukuran: "50+".to_string(),
            jumlah_terjual: 3.0,
            total_harga: 250.5,
        }];
        let csv = sales_csv(&records);
        let line = csv.lines().nth(1).unwrap();
        let fields = split_csv_line(line);
        assert_eq!(fields[1], "Custom \"Jumbo\", besar");
        assert_eq!(fields[4], "250.50");
    }

    #[test]
    fn test_csv_filename_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(sales_csv_filename(date), "data_penjualan_2024-03-09.csv");
    }
}

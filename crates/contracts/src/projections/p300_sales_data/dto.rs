use serde::{Deserialize, Serialize};

/// DTO для записи Sales Data (P300)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: i64,

    // Dimensions
    pub kategori: String,
    pub ukuran: String,

    // Sums
    pub jumlah_terjual: f64,
    pub total_harga: f64,
}

impl SalesRecord {
    /// A record is Standard when its kategori is exactly `Standard`;
    /// every other kategori counts as Non-Standard.
    pub fn is_standard(&self) -> bool {
        self.kategori == "Standard"
    }
}

/// Ответ `GET /data/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStats {
    pub total_records: u64,
    pub standard_count: u64,
    pub non_standard_count: u64,
}

/// Ответ со списком записей продаж
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesListResponse {
    pub items: Vec<SalesRecord>,
    pub total_count: i32,
}

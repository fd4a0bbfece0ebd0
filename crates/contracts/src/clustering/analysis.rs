use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Одна исходная строка продаж внутри диапазона размеров.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeItem {
    pub kategori: String,
    pub jumlah_terjual: f64,
}

/// Результат кластеризации по одному диапазону размеров.
///
/// The server emits `dominant_cluster` as an integer, as the string
/// sentinel `"-"`, or omits it entirely; all non-integer forms map to
/// `None` so rendering never branches on payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub total_terjual: f64,
    #[serde(default, deserialize_with = "deserialize_dominant_cluster")]
    pub dominant_cluster: Option<u8>,
    #[serde(default)]
    pub items: Option<Vec<RangeItem>>,
    /// Tier key precomputed by the server for the grouped analysis view
    /// (`terlaris` / `sedang` / `kurang_laris`).
    #[serde(default)]
    pub tier: Option<String>,
}

impl RangeRecord {
    /// Number of underlying rows this range contributes, 1 when the
    /// item list is absent.
    pub fn item_count(&self) -> u64 {
        self.items.as_ref().map(|i| i.len() as u64).unwrap_or(1)
    }

    /// Kategori of the first underlying row, if any.
    pub fn first_kategori(&self) -> Option<&str> {
        self.items
            .as_ref()
            .and_then(|items| items.first())
            .map(|item| item.kategori.as_str())
    }
}

/// Ответ анализа кластеризации: два блока диапазонов, Standard и
/// Non-Standard, каждый keyed по метке диапазона.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringAnalysis {
    #[serde(default)]
    pub standard: BTreeMap<String, RangeRecord>,
    #[serde(default)]
    pub non_standard: BTreeMap<String, RangeRecord>,
}

impl ClusteringAnalysis {
    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.non_standard.is_empty()
    }
}

fn deserialize_dominant_cluster<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().map(|n| n as u8),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_cluster_integer() {
        let record: RangeRecord =
            serde_json::from_str(r#"{"total_terjual": 120.0, "dominant_cluster": 2}"#).unwrap();
        assert_eq!(record.dominant_cluster, Some(2));
    }

    #[test]
    fn test_dominant_cluster_sentinel_dash() {
        let record: RangeRecord =
            serde_json::from_str(r#"{"total_terjual": 120.0, "dominant_cluster": "-"}"#).unwrap();
        assert_eq!(record.dominant_cluster, None);
    }

    #[test]
    fn test_dominant_cluster_absent() {
        let record: RangeRecord = serde_json::from_str(r#"{"total_terjual": 0.0}"#).unwrap();
        assert_eq!(record.dominant_cluster, None);
        assert_eq!(record.item_count(), 1);
    }

    #[test]
    fn test_item_count_uses_item_list() {
        let record: RangeRecord = serde_json::from_str(
            r#"{
                "total_terjual": 30.0,
                "dominant_cluster": 0,
                "items": [
                    {"kategori": "Standard", "jumlah_terjual": 10.0},
                    {"kategori": "Standard", "jumlah_terjual": 20.0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(record.item_count(), 2);
        assert_eq!(record.first_kategori(), Some("Standard"));
    }

    #[test]
    fn test_analysis_missing_groups_default_empty() {
        let analysis: ClusteringAnalysis = serde_json::from_str(r#"{}"#).unwrap();
        assert!(analysis.is_empty());
    }
}

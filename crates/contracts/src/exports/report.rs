use chrono::NaiveDate;

/// Persisted metrics of both algorithms for the plain-text export.
/// Absent metrics (never run, or reset) print as `-`.
#[derive(Debug, Clone, Default)]
pub struct ResultsSummary {
    pub kmeans_inertia: Option<f64>,
    pub kmeans_dbi: Option<f64>,
    pub kmedoids_cost: Option<f64>,
    pub kmedoids_dbi: Option<f64>,
}

fn metric(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.prec$}", v, prec = decimals),
        None => "-".to_string(),
    }
}

/// Plain-text dump of the clustering metrics.
pub fn results_text(summary: &ResultsSummary) -> String {
    let mut text = String::new();
    text.push_str("HASIL CLUSTERING ARWANA SALES\n");
    text.push_str("============================\n\n");

    text.push_str("KMEANS\n");
    text.push_str(&format!("Inertia: {}\n", metric(summary.kmeans_inertia, 2)));
    text.push_str(&format!("DBI: {}\n\n", metric(summary.kmeans_dbi, 3)));

    text.push_str("KMEDOIDS\n");
    text.push_str(&format!("Cost: {}\n", metric(summary.kmedoids_cost, 2)));
    text.push_str(&format!("DBI: {}\n\n", metric(summary.kmedoids_dbi, 3)));

    text
}

/// `clustering_results_<YYYY-MM-DD>.txt`
pub fn results_filename(date: NaiveDate) -> String {
    format!("clustering_results_{}.txt", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_text_layout() {
        let summary = ResultsSummary {
            kmeans_inertia: Some(1234.567),
            kmeans_dbi: Some(0.4219),
            kmedoids_cost: None,
            kmedoids_dbi: None,
        };
        let text = results_text(&summary);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "HASIL CLUSTERING ARWANA SALES");
        assert_eq!(lines[1], "============================");
        assert_eq!(lines[3], "KMEANS");
        assert_eq!(lines[4], "Inertia: 1234.57");
        assert_eq!(lines[5], "DBI: 0.422");
        assert_eq!(lines[7], "KMEDOIDS");
        assert_eq!(lines[8], "Cost: -");
        assert_eq!(lines[9], "DBI: -");
    }

    #[test]
    fn test_results_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(results_filename(date), "clustering_results_2025-01-31.txt");
    }
}

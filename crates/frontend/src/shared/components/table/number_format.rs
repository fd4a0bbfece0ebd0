//! Утилиты форматирования чисел для таблиц

/// Количество проданных единиц: целые штуки.
pub fn format_qty(value: f64) -> String {
    format!("{:.0}", value)
}

/// Метрики запуска (inertia, cost): два знака.
pub fn format_metric(value: f64) -> String {
    format!("{:.2}", value)
}

/// Davies-Bouldin и расстояния: три знака.
pub fn format_distance(value: f64) -> String {
    format!("{:.3}", value)
}

/// Optional metric for the stat tiles; `-` until a run exists.
pub fn format_metric_opt(value: Option<f64>) -> Option<String> {
    value.map(format_metric)
}

pub fn format_distance_opt(value: Option<f64>) -> Option<String> {
    value.map(format_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_qty() {
        assert_eq!(format_qty(120.0), "120");
        assert_eq!(format_qty(15.5), "16");
        assert_eq!(format_qty(0.0), "0");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(1234.567), "1234.57");
        assert_eq!(format_metric(0.0), "0.00");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.42195), "0.422");
        assert_eq!(format_distance(12.0), "12.000");
    }

    #[test]
    fn test_optional_metrics() {
        assert_eq!(format_metric_opt(Some(3.14159)), Some("3.14".to_string()));
        assert_eq!(format_metric_opt(None), None);
        assert_eq!(format_distance_opt(Some(0.1)), Some("0.100".to_string()));
    }
}

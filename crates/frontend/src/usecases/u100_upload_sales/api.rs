use crate::shared::api::{get_json, post_empty, post_multipart};
use contracts::projections::p300_sales_data::dto::DataStats;
use contracts::shared::api::StatusResponse;
use web_sys::FormData;

/// Загрузить файл продаж (multipart, поле `file`).
pub async fn upload_file(file: web_sys::File) -> Result<StatusResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    post_multipart("/upload", &form_data).await
}

/// Счётчики записей после загрузки.
pub async fn get_stats() -> Result<DataStats, String> {
    get_json("/data/stats").await
}

/// Удалить все загруженные данные.
pub async fn delete_data() -> Result<StatusResponse, String> {
    post_empty("/delete/data").await
}

/// Удалить все результаты кластеризации.
pub async fn delete_results() -> Result<StatusResponse, String> {
    post_empty("/delete/results").await
}

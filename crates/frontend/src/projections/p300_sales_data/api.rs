use crate::shared::api::get_json;
use contracts::projections::p300_sales_data::dto::{SalesListResponse, SalesRecord};

/// Получить все записи продаж для таблицы.
pub async fn fetch_sales() -> Result<Vec<SalesRecord>, String> {
    let response: SalesListResponse = get_json("/data").await?;
    Ok(response.items)
}

use crate::projections::p300_sales_data::api;
use crate::shared::components::pager_controls::PagerControls;
use crate::shared::components::table::number_format::{format_metric, format_qty};
use crate::shared::download::{download_text_file, today};
use contracts::exports::csv::{sales_csv, sales_csv_filename};
use contracts::projections::p300_sales_data::dto::SalesRecord;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

const PAGE_SIZE: usize = 10;

/// Case-insensitive substring search over every cell a table row shows,
/// plus the category dropdown (Non-Standard = any kategori other than
/// `Standard`).
fn matches_filters(record: &SalesRecord, search_lower: &str, category: &str) -> bool {
    let match_category = match category {
        "" => true,
        "Standard" => record.is_standard(),
        "Non-Standard" => !record.is_standard(),
        other => record.kategori == other,
    };
    if !match_category {
        return false;
    }
    if search_lower.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {} {}",
        record.id,
        record.kategori,
        record.ukuran,
        format_qty(record.jumlah_terjual),
        format_metric(record.total_harga),
    )
    .to_lowercase();
    haystack.contains(search_lower)
}

fn filter_records(records: &[SalesRecord], search: &str, category: &str) -> Vec<SalesRecord> {
    let search_lower = search.to_lowercase();
    records
        .iter()
        .filter(|record| matches_filters(record, &search_lower, category))
        .cloned()
        .collect()
}

/// Start/end (exclusive) of the slice shown on a 1-indexed page.
fn page_bounds(count: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = (page.max(1) - 1) * page_size;
    let start = start.min(count);
    (start, (start + page_size).min(count))
}

#[component]
pub fn SalesDataList() -> impl IntoView {
    let (records, set_records) = signal(Vec::<SalesRecord>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Filter state
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (page, set_page) = signal(1usize);

    let filtered = move || filter_records(&records.get(), &search.get(), &category.get());

    let load_records = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_sales().await {
                Ok(data) => {
                    set_records.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    log!("Failed to fetch sales data: {:?}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Load data on mount
    Effect::new(move |_| {
        load_records();
    });

    view! {
        <div class="sales-data-list" style="background: #f8f9fa; padding: 12px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
            // Header row: title + refresh/export actions
            <div style="background: linear-gradient(135deg, #4a5568 0%, #2d3748 100%); padding: 8px 12px; border-radius: 6px 6px 0 0; margin: -12px -12px 10px -12px; display: flex; align-items: center; justify-content: space-between;">
                <h2 style="margin: 0; font-size: 1.1rem; font-weight: 600; color: white; letter-spacing: 0.5px;">"📋 Data Penjualan"</h2>
                <div style="display: flex; gap: 8px; align-items: center;">
                    <button
                        on:click=move |_| load_records()
                        style="height: 32px; padding: 0 16px; background: #48bb78; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                    >
                        "↻ Muat Ulang"
                    </button>
                    <button
                        on:click=move |_| {
                            let data = filtered();
                            let csv = sales_csv(&data);
                            if let Err(e) = download_text_file(
                                &sales_csv_filename(today()),
                                "text/csv;charset=utf-8;",
                                &csv,
                            ) {
                                log!("Failed to export: {}", e);
                            }
                        }
                        style="height: 32px; padding: 0 16px; background: #217346; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                        disabled=move || loading.get() || records.get().is_empty()
                    >
                        "📑 Export CSV"
                    </button>
                </div>
            </div>

            // Filter row: search + category
            <div style="background: white; padding: 8px 12px; margin: 0 -12px 10px -12px; border-bottom: 1px solid #e9ecef; display: flex; align-items: center; gap: 12px; flex-wrap: wrap;">
                <div style="display: flex; align-items: center; gap: 8px;">
                    <label style="margin: 0; font-size: 0.875rem; font-weight: 500; color: #495057;">"Cari:"</label>
                    <input
                        type="text"
                        placeholder="Cari di semua kolom..."
                        prop:value=search
                        on:input=move |ev| {
                            set_search.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                        style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; min-width: 220px;"
                    />
                </div>
                <div style="display: flex; align-items: center; gap: 8px;">
                    <label style="margin: 0; font-size: 0.875rem; font-weight: 500; color: #495057;">"Kategori:"</label>
                    <select
                        prop:value=category
                        on:change=move |ev| {
                            set_category.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                        style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; min-width: 150px; background: #fff;"
                    >
                        <option value="">"Semua"</option>
                        <option value="Standard">"Standard"</option>
                        <option value="Non-Standard">"Non-Standard"</option>
                    </select>
                </div>
                <div style="margin-left: auto;">
                    <PagerControls
                        current_page=page
                        filtered_count=Signal::derive(move || filtered().len())
                        page_size=PAGE_SIZE
                        on_page_change=Callback::new(move |p| set_page.set(p))
                    />
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <div>"Loading..."</div> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <div style="color: red;">{err}</div> }.into_any()
                } else {
                    let data = filtered();
                    let (start, end) = page_bounds(data.len(), page.get(), PAGE_SIZE);
                    // Row numbers follow the filtered order, not record ids.
                    let visible: Vec<(usize, SalesRecord)> = data[start..end]
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(idx, record)| (start + idx + 1, record))
                        .collect();

                    view! {
                        <div style="overflow-y: auto; border: 1px solid #e0e0e0; border-radius: 6px;">
                            <table class="data-table" style="width: 100%; border-collapse: collapse; margin: 0; font-size: 0.85em; background: white;">
                                <thead style="position: sticky; top: 0; z-index: 10; background: #f8f9fa;">
                                    <tr>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"#"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"ID"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"Kategori"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"Ukuran"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: right; font-weight: 600;">"Jumlah Terjual"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: right; font-weight: 600;">"Total Harga"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if visible.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="6" style="padding: 16px; text-align: center; color: #6c757d;">"Tidak ada data"</td>
                                            </tr>
                                        }.into_any()
                                    } else {
                                        visible.into_iter().map(|(number, record)| {
                                            view! {
                                                <tr style="border-bottom: 1px solid #f1f3f5;">
                                                    <td style="padding: 6px 10px; color: #6c757d;">{number}</td>
                                                    <td style="padding: 6px 10px;">{record.id}</td>
                                                    <td style="padding: 6px 10px;">{record.kategori.clone()}</td>
                                                    <td style="padding: 6px 10px;">{record.ukuran.clone()}</td>
                                                    <td style="padding: 6px 10px; text-align: right;">{format_qty(record.jumlah_terjual)}</td>
                                                    <td style="padding: 6px 10px; text-align: right;">{format_metric(record.total_harga)}</td>
                                                </tr>
                                            }
                                        }).collect_view().into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, kategori: &str, ukuran: &str, qty: f64, harga: f64) -> SalesRecord {
        SalesRecord {
            id,
            kategori: kategori.to_string(),
            ukuran: ukuran.to_string(),
            jumlah_terjual: qty,
            total_harga: harga,
        }
    }

    fn fixture() -> Vec<SalesRecord> {
        vec![
            record(1, "Standard", "33-36", 120.0, 1_200_000.0),
            record(2, "Standard", "37-40", 80.0, 800_000.0),
            record(3, "Custom Jumbo", "50+", 12.0, 400_000.0),
            record(4, "Anak", "20-24", 45.0, 150_000.0),
        ]
    }

    #[test]
    fn test_search_matches_any_column() {
        let records = fixture();
        assert_eq!(filter_records(&records, "jumbo", "").len(), 1);
        assert_eq!(filter_records(&records, "37-40", "").len(), 1);
        // Search hits formatted numbers too, like text search over cells.
        assert_eq!(filter_records(&records, "120", "").len(), 1);
        assert_eq!(filter_records(&records, "", "").len(), 4);
    }

    #[test]
    fn test_category_filter_non_standard_is_everything_else() {
        let records = fixture();
        assert_eq!(filter_records(&records, "", "Standard").len(), 2);
        let non_standard = filter_records(&records, "", "Non-Standard");
        assert_eq!(non_standard.len(), 2);
        assert!(non_standard.iter().all(|r| r.kategori != "Standard"));
    }

    #[test]
    fn test_search_and_category_combine() {
        let records = fixture();
        assert_eq!(filter_records(&records, "anak", "Non-Standard").len(), 1);
        assert_eq!(filter_records(&records, "anak", "Standard").len(), 0);
    }

    #[test]
    fn test_page_bounds_windows() {
        assert_eq!(page_bounds(25, 1, 10), (0, 10));
        assert_eq!(page_bounds(25, 2, 10), (10, 20));
        assert_eq!(page_bounds(25, 3, 10), (20, 25));
        // Past-the-end page clamps to an empty slice.
        assert_eq!(page_bounds(25, 9, 10), (25, 25));
        assert_eq!(page_bounds(0, 1, 10), (0, 0));
    }
}

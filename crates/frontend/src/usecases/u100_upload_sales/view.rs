use super::api;
use crate::shared::components::alert::{Alert, AlertBox};
use crate::shared::components::stat_card::StatCard;
use crate::shared::download::confirm;
use contracts::projections::p300_sales_data::dto::DataStats;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "u100-file-input";

fn file_input() -> Option<web_sys::HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(FILE_INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

#[component]
pub fn UploadSalesPage() -> impl IntoView {
    let (file_name, set_file_name) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (drag_over, set_drag_over) = signal(false);
    let (stats, set_stats) = signal(None::<DataStats>);
    let alert = RwSignal::new(None::<Alert>);

    let load_stats = move || {
        spawn_local(async move {
            match api::get_stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => log!("Error loading statistics: {}", e),
            }
        });
    };

    // Load stats on page load
    Effect::new(move |_| {
        load_stats();
    });

    let on_file_change = move |_| {
        let name = file_input()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_file_name.set(name);
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() == 0 {
            return;
        }
        if let Some(input) = file_input() {
            input.set_files(Some(&files));
        }
        if let Some(file) = files.get(0) {
            set_file_name.set(Some(file.name()));
        }
    };

    let on_upload = move |_| {
        if uploading.get() {
            return;
        }
        let Some(file) = file_input()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            alert.set(Some(Alert::error("Pilih file terlebih dahulu")));
            return;
        };

        set_uploading.set(true);
        alert.set(None);
        spawn_local(async move {
            match api::upload_file(file).await {
                Ok(resp) if resp.is_success() => {
                    alert.set(Some(Alert::success(resp.message_text())));
                    if let Some(input) = file_input() {
                        input.set_value("");
                    }
                    set_file_name.set(None);
                    load_stats();
                }
                Ok(resp) => {
                    alert.set(Some(Alert::error(resp.error_text())));
                }
                Err(e) => {
                    alert.set(Some(Alert::error(format!("Upload failed: {}", e))));
                }
            }
            set_uploading.set(false);
        });
    };

    let on_delete_data = move |_| {
        if deleting.get() {
            return;
        }
        if !confirm("⚠️ Apakah Anda yakin ingin menghapus SEMUA data? Tindakan ini tidak bisa dibatalkan!") {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_data().await {
                Ok(resp) if resp.is_success() => {
                    alert.set(Some(Alert::success(resp.message_text())));
                    set_stats.set(None);
                    load_stats();
                }
                Ok(resp) => alert.set(Some(Alert::error(resp.error_text()))),
                Err(e) => alert.set(Some(Alert::error(format!("Delete failed: {}", e)))),
            }
            set_deleting.set(false);
        });
    };

    let on_delete_results = move |_| {
        if deleting.get() {
            return;
        }
        if !confirm("⚠️ Apakah Anda yakin ingin menghapus SEMUA hasil clustering?") {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_results().await {
                Ok(resp) if resp.is_success() => {
                    alert.set(Some(Alert::success(resp.message_text())));
                }
                Ok(resp) => alert.set(Some(Alert::error(resp.error_text()))),
                Err(e) => alert.set(Some(Alert::error(format!("Delete failed: {}", e)))),
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="upload-page" style="max-width: 860px;">
            <h2 style="margin: 0 0 12px 0; font-size: 1.2rem; font-weight: 700; color: #2d3748;">"📤 Upload Data Penjualan"</h2>

            <AlertBox alert=alert />

            // Drop zone + file picker
            <label
                for=FILE_INPUT_ID
                class="file-input-label"
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
                style=move || format!(
                    "display: block; padding: 32px; border: 2px dashed #90caf9; border-radius: 8px; text-align: center; cursor: pointer; color: white; background: {}; transition: background 0.2s ease;",
                    if drag_over.get() { "#0056b3" } else { "#007bff" },
                )
            >
                <div style="font-size: 2rem;">"📁"</div>
                <div style="font-weight: 600; margin-top: 8px;">"Pilih file atau tarik ke sini"</div>
                <div style="font-size: 0.8rem; margin-top: 4px; opacity: 0.85;">"Format: CSV / Excel dengan kolom penjualan"</div>
            </label>
            <input
                id=FILE_INPUT_ID
                type="file"
                accept=".csv,.xlsx"
                on:change=on_file_change
                style="display: none;"
            />

            {move || file_name.get().map(|name| view! {
                <div style="margin-top: 8px; font-size: 0.875rem; color: #198754;">
                    "✓ File terpilih: " {name}
                </div>
            })}

            <div style="margin-top: 12px; display: flex; gap: 8px;">
                <button
                    on:click=on_upload
                    prop:disabled=move || uploading.get()
                    style="padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.9rem; font-weight: 500;"
                >
                    {move || if uploading.get() { "Uploading..." } else { "⬆ Upload" }}
                </button>
                <button
                    on:click=on_delete_data
                    prop:disabled=move || deleting.get()
                    style="padding: 10px 20px; background: #dc3545; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.9rem; font-weight: 500;"
                >
                    {move || if deleting.get() { "Menghapus..." } else { "🗑 Hapus Data" }}
                </button>
                <button
                    on:click=on_delete_results
                    prop:disabled=move || deleting.get()
                    style="padding: 10px 20px; background: #6c757d; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.9rem; font-weight: 500;"
                >
                    {move || if deleting.get() { "Menghapus..." } else { "🗑 Hapus Hasil" }}
                </button>
            </div>

            // Statistics after upload
            {move || stats.get().map(|s| {
                let (total, standard, non_standard) =
                    (s.total_records, s.standard_count, s.non_standard_count);
                view! {
                    <div class="stats" style="margin-top: 20px; display: flex; gap: 12px; flex-wrap: wrap;">
                        <StatCard
                            label="Total Records"
                            value=Signal::derive(move || Some(total.to_string()))
                        />
                        <StatCard
                            label="Standard"
                            value=Signal::derive(move || Some(standard.to_string()))
                            accent="#198754"
                        />
                        <StatCard
                            label="Non-Standard"
                            value=Signal::derive(move || Some(non_standard.to_string()))
                            accent="#dc3545"
                        />
                    </div>
                }
            })}
        </div>
    }
}

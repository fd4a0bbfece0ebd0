pub mod sidebar;

use crate::dashboards::d300_clustering_results::view::ClusteringResultsPage;
use crate::projections::p300_sales_data::ui::list::SalesDataList;
use crate::usecases::u100_upload_sales::view::UploadSalesPage;
use crate::usecases::u200_run_clustering::kmeans::KmeansPage;
use crate::usecases::u200_run_clustering::kmedoids::KmedoidsPage;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Pages of the application. The shell owns the active page signal and
/// hands it to the sidebar; pages themselves are stateless about
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    UploadSales,
    SalesData,
    Kmeans,
    Kmedoids,
    Results,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::UploadSales,
        Page::SalesData,
        Page::Kmeans,
        Page::Kmedoids,
        Page::Results,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::UploadSales => "Upload Data",
            Page::SalesData => "Data Penjualan",
            Page::Kmeans => "KMeans",
            Page::Kmedoids => "KMedoids",
            Page::Results => "Hasil Clustering",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::UploadSales => "📤",
            Page::SalesData => "📋",
            Page::Kmeans => "📊",
            Page::Kmedoids => "🎯",
            Page::Results => "🏁",
        }
    }
}

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let active_page = RwSignal::new(Page::UploadSales);

    view! {
        <div class="app-layout" style="display: flex; min-height: 100vh; background: #f1f3f5;">
            <Sidebar active_page=active_page />

            // Main content area
            <div class="app-main" style="flex: 1; padding: 16px; overflow-y: auto;">
                {move || match active_page.get() {
                    Page::UploadSales => view! { <UploadSalesPage /> }.into_any(),
                    Page::SalesData => view! { <SalesDataList /> }.into_any(),
                    Page::Kmeans => view! { <KmeansPage /> }.into_any(),
                    Page::Kmedoids => view! { <KmedoidsPage /> }.into_any(),
                    Page::Results => view! { <ClusteringResultsPage /> }.into_any(),
                }}
            </div>
        </div>
    }
}

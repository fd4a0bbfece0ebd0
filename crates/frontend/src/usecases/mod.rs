pub mod u100_upload_sales;
pub mod u200_run_clustering;

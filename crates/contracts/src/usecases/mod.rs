pub mod u200_run_clustering;

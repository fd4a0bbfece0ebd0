pub mod d300_clustering_results;

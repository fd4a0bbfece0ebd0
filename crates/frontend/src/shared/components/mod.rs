pub mod alert;
pub mod cluster_badge;
pub mod pager_controls;
pub mod stat_card;
pub mod table;

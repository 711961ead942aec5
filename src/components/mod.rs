pub mod filter_menu;
pub mod force_graph;

pub mod tree_menu;

// Components - the pieces the views are assembled from
//
// Each component renders from plain data (theme, controller, form) rather
// than the whole App, so views decide what goes where.

pub mod dog_table;
pub mod filter_flyout;
pub mod header;
pub mod login_form;
pub mod logs_panel;
pub mod pagination;
pub mod status_bar;
pub mod toast;
pub mod toolbar;

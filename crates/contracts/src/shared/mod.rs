pub mod paging;
pub mod reference_data;
pub mod view_state;

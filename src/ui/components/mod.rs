pub mod avatar;
pub mod call_view;
pub mod chat_area;
pub mod chat_list;
pub mod incoming_call;
pub mod input_bar;
pub mod nav_rail;
pub mod side_views;

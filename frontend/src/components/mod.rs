pub mod forms;
pub mod header;
pub mod kid_list;
pub mod kid_text_field;
pub mod register_kid_modal;

pub mod kid_form;

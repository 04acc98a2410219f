pub mod use_kid_register;
pub mod use_kids;

pub mod register_kid_store;

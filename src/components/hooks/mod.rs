pub mod use_field_id;

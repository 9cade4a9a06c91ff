pub mod date_deserialization_ops;
pub mod duration_format;
pub mod mode_ops;

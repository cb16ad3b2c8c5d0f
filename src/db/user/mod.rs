pub mod get;

pub use get::get_user_by_id;

pub mod list;
pub mod preferred;
pub mod record;
pub mod search;

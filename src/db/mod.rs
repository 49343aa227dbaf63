pub mod connection;
pub mod players;
pub mod schema;
pub mod splits;
#[cfg(test)]
pub(crate) mod test_utils;

pub use connection::Db;
pub use players::list_balances;
pub use schema::ensure_schema;
pub use splits::{SPLIT_LIST_LIMIT, list_splits, split_detail};

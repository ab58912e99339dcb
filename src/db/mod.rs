pub mod migrate;
pub mod pool;
pub mod schema;

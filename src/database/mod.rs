pub mod db;
pub mod db_structs;
pub mod error;

pub use error::DbError;

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod services;

pub use error::{DaoError, DaoResult};
pub use services::instructor::{AppDao, InstructorDao};

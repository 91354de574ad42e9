pub mod account;
pub mod admin;
pub mod catalog;

pub use account::PostgresAccountRepository;
pub use admin::PostgresAdminRepository;
pub use catalog::PostgresCatalogRepository;

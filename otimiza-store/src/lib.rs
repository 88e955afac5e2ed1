pub mod app_config;
pub mod calculation_repo;
pub mod database;
pub mod memory_repo;

pub use calculation_repo::PostgresCalculationRepository;
pub use database::DbClient;
pub use memory_repo::InMemoryCalculationRepository;

pub mod memory;
pub use memory::Table;
pub mod seed;
pub mod operations_repo;
pub use operations_repo::OperationsRepository;

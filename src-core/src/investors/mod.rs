// Module declarations
pub(crate) mod investors_errors;
pub(crate) mod investors_model;
pub(crate) mod investors_repository;
pub(crate) mod investors_service;
pub(crate) mod investors_traits;

mod investors_model_tests;

// Re-export the public interface
pub use investors_errors::InvestorError;
pub use investors_model::{Investor, InvestorDB, InvestorUpdate, NewInvestor};
pub use investors_repository::InvestorRepository;
pub use investors_service::InvestorService;
pub use investors_traits::{InvestorRepositoryTrait, InvestorServiceTrait};

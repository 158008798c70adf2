// Module declarations
pub(crate) mod dashboard_model;
pub(crate) mod dashboard_repository;
pub(crate) mod dashboard_service;
pub(crate) mod dashboard_traits;

// Re-export the public interface
pub use dashboard_model::{DashboardStats, TopInvestor};
pub use dashboard_repository::DashboardRepository;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};

mod dashboard;
mod error;
pub mod landing;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use landing::LandingPage;

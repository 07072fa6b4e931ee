pub(crate) mod doughnut_chart;
pub(crate) mod feature_card;
pub(crate) mod login_form;
pub(crate) mod login_modal;
pub(crate) mod navbar;
pub(crate) mod sidebar;

// Re-export components for convenience
pub use doughnut_chart::DoughnutChart;
pub use feature_card::FeatureCard;
pub use login_modal::LoginModal;
pub use navbar::Navbar;
pub use sidebar::{MenuToggle, Sidebar};

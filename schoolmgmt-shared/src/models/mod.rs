pub mod card;
pub mod chart;
pub mod errors;
pub mod login;
pub mod mobile;
pub mod navbar;
pub mod style;
pub mod user;

pub use card::CardVisual;
pub use chart::{CenterDisplay, ChartConfig, ChartSpec, DashboardChart, Segment};
pub use errors::InteractionError;
pub use login::{LoginError, LoginForm, LoginOutcome, PendingLogin, SubmitButton};
pub use navbar::NavbarBackground;
pub use style::StyleDeclaration;
pub use user::{Destination, UserRole};

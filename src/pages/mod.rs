//! Page components for BizCard, one per route.

mod analytics;
mod auth;
pub(crate) mod cards;
mod dashboard_home;
mod home;
mod placeholder;
mod profile;
mod public_card;
mod qr_generator;
mod settings;

pub use analytics::Analytics;
pub use auth::{ForgotPassword, Login, Register, ResetPassword, VerifyEmail};
pub use cards::{CreateCard, EditCard, MyCards, PreviewCard, Templates};
pub use dashboard_home::DashboardHome;
pub use home::Home;
pub use placeholder::{ComingSoon, NotFound};
pub use profile::Profile;
pub use public_card::{PublicCard, ShortCard};
pub use qr_generator::QrGenerator;
pub use settings::Settings;

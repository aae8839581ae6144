//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod delete_account;
pub mod edit_profile;
pub mod session;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use delete_account::DeleteAccountUseCase;
pub use edit_profile::{EditProfileInput, EditProfileUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};

//! Form DTOs (application/x-www-form-urlencoded)
//!
//! Missing fields deserialize as empty strings; the use cases decide what
//! an empty field means.

use serde::Deserialize;

use crate::application::{EditProfileInput, SignInInput, SignUpInput};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up form
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<SignUpForm> for SignUpInput {
    fn from(form: SignUpForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// Login form
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl From<SignInForm> for SignInInput {
    fn from(form: SignInForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

// ============================================================================
// Edit Profile
// ============================================================================

/// Profile edit form; empty fields keep the current value
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct EditProfileForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<EditProfileForm> for EditProfileInput {
    fn from(form: EditProfileForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
        }
    }
}

//! HTML views for the auth pages

use std::sync::LazyLock;

use kernel::html::Templates;
use minijinja::context;

use crate::domain::entity::user::User;
use crate::error::AuthResult;
use crate::presentation::middleware::CurrentUser;

static TEMPLATES: LazyLock<Templates> = LazyLock::new(|| {
    Templates::new(&[
        ("home.html", include_str!("../../templates/home.html")),
        ("signup.html", include_str!("../../templates/signup.html")),
        ("login.html", include_str!("../../templates/login.html")),
        ("edit_profile.html", include_str!("../../templates/edit_profile.html")),
    ])
});

/// GET /
pub fn home(current: Option<&CurrentUser>) -> AuthResult<String> {
    let username = current.map(|user| user.username.as_str());
    Ok(TEMPLATES.render("home.html", context! { username => username })?)
}

/// Sign up form, optionally with the previous input and an error
pub fn signup(error: Option<&str>, username: &str, email: &str) -> AuthResult<String> {
    Ok(TEMPLATES.render(
        "signup.html",
        context! { error => error, form_username => username, form_email => email },
    )?)
}

/// Login form
pub fn login(error: Option<&str>, email: &str) -> AuthResult<String> {
    Ok(TEMPLATES.render("login.html", context! { error => error, form_email => email })?)
}

/// Profile edit form, pre-filled from `user`
pub fn edit_profile(user: &User, error: Option<&str>) -> AuthResult<String> {
    Ok(TEMPLATES.render(
        "edit_profile.html",
        context! {
            error => error,
            user_id => user.user_id.to_string(),
            username => user.username.as_str(),
            email => user.email.as_str(),
        },
    )?)
}

/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use roster_storage::User;
use serde::Deserialize;

// Shape check only: one @, no whitespace, a dot in the domain part.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,
}

/// GET /users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.db.list_users().await?;
    Ok(Json(users))
}

/// POST /users
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<User>> {
    validate_email(&req.email)?;

    let user = app_state
        .db
        .create_user(&req.email, req.display_name.as_deref())
        .await?;

    Ok(Json(user))
}

/// Check that an email field looks like an address
pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(ServerError::Validation(format!(
            "email is not a valid address: {}",
            email
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("ada.lovelace+tag@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing-domain@").is_err());
        assert!(validate_email("@missing-local.com").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("spaces in@example.com").is_err());
        assert!(validate_email("no-tld@example").is_err());
        assert!(validate_email("").is_err());
    }
}

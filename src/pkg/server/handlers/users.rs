use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::{Validate, ValidateEmail};

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::{
                candidates::mutators::CandidateMutator,
                password_resets::{mutators::ResetTokenMutator, selectors::ResetTokenSelector},
                recruiters::mutators::RecruiterMutator,
                users::{mutators::UserMutator, selectors::UserSelector},
            },
            auth::{
                clear_token_cookie, hash_password, issue_token, token_cookie, verify_password,
                AuthSession, Role,
            },
            email::{recovery::PasswordResetTemplate, SendEmail},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::*,
};

#[derive(Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Empty strings mean "leave unchanged"; the client always sends all three
/// fields.
#[derive(Deserialize)]
pub struct UpdateProfileInput {
    pub current_password: String,
    pub email: String,
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct DeleteUserInput {
    pub password: String,
}

#[derive(Deserialize)]
pub struct RecoverQuery {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordInput {
    pub reset_token: String,
    pub new_password: String,
}

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let users = UserSelector::new(&mut conn).get_all().await?;
    Ok(Json(json!({ "users": users })))
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<Value>)> {
    input.validate()?;

    let mut tx = state.db_pool.begin_txn().await?;
    if UserSelector::new(&mut tx)
        .get_by_email(&input.email)
        .await?
        .is_some()
    {
        return Err(Error::Validation("Email already exists".into()));
    }

    let password = hash_password(&input.password)?;
    let user = UserMutator::new(&mut tx)
        .create(&input.email, &password, input.role)
        .await?;

    // every account carries an (initially empty) role profile
    match input.role {
        Role::Candidate => {
            CandidateMutator::new(&mut tx)
                .create_empty(&user.user_id)
                .await?;
        }
        Role::Recruiter => {
            RecruiterMutator::new(&mut tx)
                .create_empty(&user.user_id)
                .await?;
        }
    }
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<Value>)> {
    input.validate()?;

    let mut conn = state.db_pool.acquire().await?;
    let user = UserSelector::new(&mut conn)
        .get_by_email(&input.email)
        .await?
        .ok_or(Error::Unauthorized)?;

    if !verify_password(&input.password, &user.password)? {
        return Err(Error::Unauthorized);
    }

    let token = issue_token(&user.user_id, user.role)?;
    let jar = jar.add(token_cookie(&token));

    Ok((
        jar,
        Json(json!({
            "user_info": {
                "uid": user.user_id,
                "email": user.email,
                "role": user.role,
            }
        })),
    ))
}

pub async fn logout(jar: CookieJar) -> Result<(CookieJar, Json<Value>)> {
    let jar = jar.remove(clear_token_cookie());
    Ok((jar, Json(json!({ "message": "Logout successful" }))))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(input): Json<UpdateProfileInput>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let user = UserSelector::new(&mut tx)
        .get_by_id(&session.user_id)
        .await?
        .ok_or(Error::NotFound("User"))?;

    if !input.email.is_empty() {
        if !input.email.validate_email() {
            return Err(Error::Validation("Invalid email".into()));
        }
        if !verify_password(&input.current_password, &user.password)? {
            return Err(Error::Validation("Current password is incorrect".into()));
        }
        if UserSelector::new(&mut tx)
            .get_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(Error::Validation("Email already taken".into()));
        }
        UserMutator::new(&mut tx)
            .update_email(&session.user_id, &input.email)
            .await?;
    }

    if !input.new_password.is_empty() {
        if !verify_password(&input.current_password, &user.password)? {
            return Err(Error::Validation("Current password is incorrect".into()));
        }
        if verify_password(&input.new_password, &user.password)? {
            return Err(Error::Validation(
                "New password cannot be the same as the current password".into(),
            ));
        }
        let password = hash_password(&input.new_password)?;
        UserMutator::new(&mut tx)
            .update_password(&session.user_id, &password)
            .await?;
    }

    tx.commit().await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User updated successfully" })),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    jar: CookieJar,
    Json(input): Json<DeleteUserInput>,
) -> Result<(CookieJar, Json<Value>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let user = UserSelector::new(&mut tx)
        .get_by_id(&session.user_id)
        .await?
        .ok_or(Error::NotFound("User"))?;

    if !verify_password(&input.password, &user.password)? {
        return Err(Error::Unauthorized);
    }

    UserMutator::new(&mut tx).delete(&session.user_id).await?;
    tx.commit().await?;

    let jar = jar.remove(clear_token_cookie());
    Ok((
        jar,
        Json(json!({ "message": "Account deleted and logged out successfully" })),
    ))
}

pub async fn send_recovery_url(
    State(state): State<AppState>,
    Query(query): Query<RecoverQuery>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    if UserSelector::new(&mut tx)
        .get_by_email(&query.email)
        .await?
        .is_none()
    {
        return Err(Error::NotFound("Email"));
    }

    let token = ResetTokenMutator::new(&mut tx)
        .issue_for_email(&query.email)
        .await?;
    tx.commit().await?;

    let link = format!(
        "{}/account/reset-password?token={}",
        settings.base_url, token.reset_token
    );
    PasswordResetTemplate { reset_url: &link }.send(&query.email)?;

    Ok(Json(json!({
        "message": "Successfully sent reset url to the requested email.",
        "resetUrl": link,
    })))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordInput>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let token = ResetTokenSelector::new(&mut tx)
        .get_by_token(&input.reset_token)
        .await?
        .ok_or_else(|| Error::Validation("Invalid token".into()))?;

    if token.is_expired(chrono::Utc::now()) {
        return Err(Error::Validation("Token has expired".into()));
    }

    if UserSelector::new(&mut tx)
        .get_by_email(&token.email)
        .await?
        .is_none()
    {
        return Err(Error::NotFound("Email"));
    }

    let password = hash_password(&input.new_password)?;
    UserMutator::new(&mut tx)
        .update_password_by_email(&token.email, &password)
        .await?;
    ResetTokenMutator::new(&mut tx).delete(token.id).await?;
    tx.commit().await?;

    Ok(Json(json!({ "message": "Password has been updated" })))
}

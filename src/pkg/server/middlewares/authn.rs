use axum::{
    extract::Request,
    http::{header::SET_COOKIE, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    pkg::internal::auth::{
        expires_soon, issue_token, token_cookie, verify_token, AuthSession, TOKEN_COOKIE,
    },
    prelude::*,
};

/// Guard for the protected route set: the signed token rides an HttpOnly
/// cookie. Valid requests gain an `AuthSession` extension; tokens inside the
/// refresh window are rotated by a Set-Cookie appended to the response.
pub async fn authenticate(mut request: Request, next: Next) -> Result<Response> {
    let jar = CookieJar::from_headers(request.headers());
    let Some(cookie) = jar.get(TOKEN_COOKIE).filter(|c| !c.value().is_empty()) else {
        tracing::warn!("token missing, authentication denied");
        return Err(Error::Unauthorized);
    };

    let claims = verify_token(cookie.value())?;
    let refresh = expires_soon(&claims);
    let session = AuthSession {
        user_id: claims.user_id,
        role: claims.role,
    };
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    if refresh {
        let token = issue_token(&session.user_id, session.role)?;
        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_str(&token_cookie(&token).to_string())?);
    }

    Ok(response)
}

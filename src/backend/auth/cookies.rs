/**
 * Session Cookie
 *
 * Builds the cookie that carries the session token and the expired cookie
 * that clears it on logout.
 *
 * Attributes: `HttpOnly`, `SameSite=Lax`, `Path=/`, `Max-Age` of seven days,
 * and `Secure` in production.
 */

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::backend::auth::sessions::SESSION_TTL_SECS;

/// Session cookie settings
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Cookie carrying a freshly issued token
    pub fn build(&self, token: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token))
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(SESSION_TTL_SECS as i64))
            .path("/")
            .build()
    }

    /// Add the session cookie to a jar
    pub fn set(&self, jar: CookieJar, token: String) -> CookieJar {
        jar.add(self.build(token))
    }

    /// Replace the session cookie with an expired, empty one
    ///
    /// Works whether or not the request carried a session.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        let mut cookie = Cookie::build((self.name.clone(), ""))
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .path("/")
            .build();
        cookie.make_removal();
        jar.add(cookie)
    }

    /// Read the session token from a jar, if present and non-empty
    pub fn token<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(&self.name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
    }
}

//! Navigation targets

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A page the application can show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Blog list (`/`, also reachable as `/overview`)
    #[default]
    Overview,
    /// One blog (`/detail/{id}`)
    Detail(i64),
    /// New post form (`/add`)
    AddBlog,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Overview => write!(f, "/"),
            Route::Detail(id) => write!(f, "/detail/{id}"),
            Route::AddBlog => write!(f, "/add"),
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_matches('/');
        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("") | Some("overview"), None, None) => Ok(Route::Overview),
            (Some("add"), None, None) => Ok(Route::AddBlog),
            (Some("detail"), Some(id), None) => id
                .parse()
                .map(Route::Detail)
                .map_err(|_| UnknownRoute(s.to_string())),
            _ => Err(UnknownRoute(s.to_string())),
        }
    }
}

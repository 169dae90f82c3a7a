//! Static description of every upstream endpoint.
//!
//! An [`Endpoint`] knows its path, the name of the identifier it is queried by, and
//! which of the optional parameters it accepts. The client turns a descriptor plus
//! arguments into a request, so adding an endpoint is one entry in [`ENDPOINTS`].

use std::fmt;

/// Number of items requested per page unless the caller says otherwise.
pub const DEFAULT_COUNT: u32 = 20;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    /// Still sent, with an empty value.
    Absent,
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Bool(true) => f.write_str("True"),
            ParamValue::Bool(false) => f.write_str("False"),
            ParamValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i.into())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

pub type Params = Vec<(&'static str, ParamValue)>;

/// Pagination arguments shared by every listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub count: u32,
    /// Opaque token taken from a previous response
    pub cursor: Option<String>,
    pub simplify: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            cursor: None,
            simplify: false,
        }
    }
}

impl Page {
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }
}

/// Which parameters an endpoint takes besides its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Identifier only.
    Lookup,
    /// Identifier and `is_simplify`.
    Simplified,
    /// Identifier, `count`, `cursor` and `is_simplify`.
    Paginated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Relative to the API base, starting with `/`
    pub path: &'static str,
    /// Query parameter carrying the identifier (username, tweet id, keyword, ...)
    pub id_param: &'static str,
    pub shape: Shape,
}

impl Endpoint {
    const fn new(path: &'static str, id_param: &'static str, shape: Shape) -> Self {
        Self {
            path,
            id_param,
            shape,
        }
    }

    /// Builds the query for this endpoint. Parameters the shape doesn't take are
    /// ignored; those it does take are always present, even when absent.
    pub fn params(&self, id: &str, page: &Page) -> Params {
        let mut params = vec![(self.id_param, ParamValue::from(id))];
        match self.shape {
            Shape::Lookup => {}
            Shape::Simplified => {
                params.push(("is_simplify", page.simplify.into()));
            }
            Shape::Paginated => {
                params.push(("count", page.count.into()));
                params.push(("cursor", page.cursor.clone().into()));
                params.push(("is_simplify", page.simplify.into()));
            }
        }
        params
    }

    pub fn from_path(path: &str) -> Option<&'static Endpoint> {
        let path = path.trim_end_matches('/');
        ENDPOINTS.iter().find(|e| {
            e.path == path || e.path.strip_prefix('/') == Some(path)
        })
    }
}

use Shape::*;

pub const USER_DETAIL: Endpoint = Endpoint::new("/user/detail", "username", Lookup);
pub const USER_FOLLOWERS: Endpoint = Endpoint::new("/user/followers", "user_id", Paginated);
pub const USER_VERIFIED_FOLLOWERS: Endpoint =
    Endpoint::new("/user/followers/blue-verified", "user_id", Paginated);
pub const USER_FOLLOWING: Endpoint = Endpoint::new("/user/following", "user_id", Paginated);
pub const USER_SUBSCRIPTIONS: Endpoint =
    Endpoint::new("/user/subscriptions", "user_id", Paginated);
pub const USER_TWEETS: Endpoint = Endpoint::new("/user/tweets", "user_id", Paginated);
pub const USER_REPLIES: Endpoint = Endpoint::new("/user/replies", "user_id", Paginated);
pub const USER_MEDIAS: Endpoint = Endpoint::new("/user/medias", "user_id", Paginated);

pub const TWEET_DETAIL: Endpoint = Endpoint::new("/tweet/detail", "tweet_id", Lookup);
pub const TWEET_RETWEETERS: Endpoint =
    Endpoint::new("/tweet/retweeters", "tweet_id", Paginated);
pub const TWEET_RETWEETS: Endpoint = Endpoint::new("/tweet/retweets", "tweet_id", Paginated);
pub const TWEET_HIDDEN_REPLIES: Endpoint =
    Endpoint::new("/tweet/hidden-replies", "tweet_id", Paginated);

pub const SEARCH_TOP: Endpoint = Endpoint::new("/search/top", "keyword", Paginated);
pub const SEARCH_LATEST: Endpoint = Endpoint::new("/search/latest", "keyword", Paginated);
pub const SEARCH_PEOPLE: Endpoint = Endpoint::new("/search/people", "keyword", Paginated);
pub const SEARCH_MEDIA: Endpoint = Endpoint::new("/search/media", "keyword", Paginated);
pub const SEARCH_LISTS: Endpoint = Endpoint::new("/search/lists", "keyword", Paginated);

pub const LIST_TWEETS: Endpoint = Endpoint::new("/list/tweets", "list_id", Paginated);
pub const LIST_FOLLOWERS: Endpoint = Endpoint::new("/list/followers", "list_id", Paginated);
pub const LIST_MEMBER: Endpoint = Endpoint::new("/list/member", "list_id", Paginated);

pub const JOB_DETAIL: Endpoint = Endpoint::new("/job/detail", "job_id", Simplified);
pub const JOB_SEARCH: Endpoint = Endpoint::new("/job/search", "keyword", Paginated);
pub const JOB_SEARCH_LOCATION: Endpoint =
    Endpoint::new("/job/search/location", "query", Lookup);

pub const ENDPOINTS: &[Endpoint] = &[
    USER_DETAIL,
    USER_FOLLOWERS,
    USER_VERIFIED_FOLLOWERS,
    USER_FOLLOWING,
    USER_SUBSCRIPTIONS,
    USER_TWEETS,
    USER_REPLIES,
    USER_MEDIAS,
    TWEET_DETAIL,
    TWEET_RETWEETERS,
    TWEET_RETWEETS,
    TWEET_HIDDEN_REPLIES,
    SEARCH_TOP,
    SEARCH_LATEST,
    SEARCH_PEOPLE,
    SEARCH_MEDIA,
    SEARCH_LISTS,
    LIST_TWEETS,
    LIST_FOLLOWERS,
    LIST_MEMBER,
    JOB_DETAIL,
    JOB_SEARCH,
    JOB_SEARCH_LOCATION,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn page_defaults() {
        let page = Page::default();
        assert_eq!(page.count, 20);
        assert_eq!(page.cursor, None);
        assert!(!page.simplify);
    }

    #[test]
    fn page_builder() {
        let page = Page::default().count(50).cursor("abc").simplify(true);
        assert_eq!(
            page,
            Page {
                count: 50,
                cursor: Some("abc".to_string()),
                simplify: true
            }
        );
    }

    #[test]
    fn param_values_as_sent() {
        assert_eq!(ParamValue::from("elonmusk").to_string(), "elonmusk");
        assert_eq!(ParamValue::from(20u32).to_string(), "20");
        assert_eq!(ParamValue::from(true).to_string(), "True");
        assert_eq!(ParamValue::from(false).to_string(), "False");
        assert_eq!(ParamValue::from(None::<String>), ParamValue::Absent);
        assert_eq!(ParamValue::Absent.to_string(), "");
    }

    #[test]
    fn paginated_params_keep_absent_cursor() {
        let params = USER_TWEETS.params("44196397", &Page::default());
        assert_eq!(
            params,
            vec![
                ("user_id", ParamValue::Str("44196397".into())),
                ("count", ParamValue::Int(20)),
                ("cursor", ParamValue::Absent),
                ("is_simplify", ParamValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn lookup_ignores_page() {
        let params = JOB_SEARCH_LOCATION.params("Berlin", &Page::default().cursor("x"));
        assert_eq!(params, vec![("query", ParamValue::Str("Berlin".into()))]);
    }

    #[test]
    fn simplified_sends_only_flag() {
        let params = JOB_DETAIL.params("42", &Page::default().count(5).simplify(true));
        assert_eq!(
            params,
            vec![
                ("job_id", ParamValue::Str("42".into())),
                ("is_simplify", ParamValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn table_is_consistent() {
        assert_eq!(ENDPOINTS.len(), 23);
        let paths: HashSet<_> = ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), ENDPOINTS.len());
        assert!(ENDPOINTS.iter().all(|e| e.path.starts_with('/')));
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(Endpoint::from_path("/user/tweets"), Some(&USER_TWEETS));
        assert_eq!(Endpoint::from_path("search/top/"), Some(&SEARCH_TOP));
        assert_eq!(Endpoint::from_path("/user"), None);
    }
}

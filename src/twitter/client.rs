use crate::error::{ConfigError, RequestError};
use crate::transport::{ReqwestTransport, Transport};
use crate::twitter::endpoint::{self, Endpoint, Page, ParamValue};
use crate::twitter::ClientConfig;
use serde_json::Value;

/// Client for the RapidAPI Twitter API.
///
/// Every accessor returns the upstream JSON untouched, or `None` when the call did
/// not succeed (the cause is logged). Use [`TwitterApi::request`] to see the cause
/// instead.
pub struct TwitterApi<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl TwitterApi {
    pub fn new(key: &str) -> Result<Self, ConfigError> {
        let config = ClientConfig::new(key)?;
        Ok(Self {
            config,
            transport: ReqwestTransport::new()?,
        })
    }
}

/// Generates one accessor per paginated endpoint.
macro_rules! paginated {
    ($($(#[$doc:meta])* $name:ident($id:ident) => $endpoint:path;)*) => {
        $(
            $(#[$doc])*
            pub async fn $name(&self, $id: &str, page: Page) -> Option<Value> {
                self.call(&$endpoint, $id, &page).await
            }
        )*
    };
}

impl<T: Transport> TwitterApi<T> {
    pub fn with_transport(key: &str, transport: T) -> Result<Self, ConfigError> {
        let config = ClientConfig::new(key)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path` (relative to the API base) and parse the body as JSON.
    pub async fn request(
        &self,
        path: &str,
        params: &[(&'static str, ParamValue)],
    ) -> Result<Value, RequestError> {
        let url = self.config.endpoint_url(path)?;
        let query = params
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect::<Vec<_>>();
        log::debug!("GET {} {:?}", url, query);
        let headers = self.config.headers()?;
        let response = self.transport.get(url, &query, &headers).await?;
        if !response.is_success() {
            return Err(RequestError::Status {
                code: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Like [`TwitterApi::request`], but failures are logged and become `None`.
    pub async fn perform(
        &self,
        path: &str,
        params: &[(&'static str, ParamValue)],
    ) -> Option<Value> {
        match self.request(path, params).await {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    pub async fn call(&self, endpoint: &Endpoint, id: &str, page: &Page) -> Option<Value> {
        self.perform(endpoint.path, &endpoint.params(id, page))
            .await
    }

    // User endpoints

    /// Profile of a user, looked up by username.
    pub async fn get_user_detail(&self, username: &str) -> Option<Value> {
        self.call(&endpoint::USER_DETAIL, username, &Page::default())
            .await
    }

    /// Looks up the numeric id (`user.result.rest_id`) of `username`.
    pub async fn get_user_id_by_username(&self, username: &str) -> Option<String> {
        let detail = self.get_user_detail(username).await?;
        match detail.pointer("/user/result/rest_id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            other => {
                log::warn!("Unexpected rest_id for {}: {}", username, other);
                None
            }
        }
    }

    paginated! {
        /// Followers of a user.
        get_user_followers(user_id) => endpoint::USER_FOLLOWERS;
        /// Blue-verified followers of a user.
        get_user_verified_followers(user_id) => endpoint::USER_VERIFIED_FOLLOWERS;
        /// Accounts a user follows.
        get_user_following(user_id) => endpoint::USER_FOLLOWING;
        /// Accounts a user subscribes to.
        get_user_subscriptions(user_id) => endpoint::USER_SUBSCRIPTIONS;
        /// Tweets posted by a user.
        get_user_tweets(user_id) => endpoint::USER_TWEETS;
        /// Replies posted by a user.
        get_user_replies(user_id) => endpoint::USER_REPLIES;
        /// Tweets of a user that carry media.
        get_user_medias(user_id) => endpoint::USER_MEDIAS;
    }

    // Tweet endpoints

    /// A single tweet with its conversation.
    pub async fn get_tweet_detail(&self, tweet_id: &str) -> Option<Value> {
        self.call(&endpoint::TWEET_DETAIL, tweet_id, &Page::default())
            .await
    }

    paginated! {
        /// Users who retweeted a tweet.
        get_tweet_retweeters(tweet_id) => endpoint::TWEET_RETWEETERS;
        /// Retweets of a tweet.
        get_tweet_retweets(tweet_id) => endpoint::TWEET_RETWEETS;
        /// Replies the author of a tweet has hidden.
        get_tweet_hidden_replies(tweet_id) => endpoint::TWEET_HIDDEN_REPLIES;
    }

    // Search endpoints

    paginated! {
        /// Top results for a keyword.
        search_top(keyword) => endpoint::SEARCH_TOP;
        /// Most recent tweets matching a keyword.
        search_latest(keyword) => endpoint::SEARCH_LATEST;
        /// Accounts matching a keyword.
        search_people(keyword) => endpoint::SEARCH_PEOPLE;
        /// Media tweets matching a keyword.
        search_media(keyword) => endpoint::SEARCH_MEDIA;
        /// Lists matching a keyword.
        search_lists(keyword) => endpoint::SEARCH_LISTS;
    }

    // List endpoints

    paginated! {
        /// Tweets from the members of a list.
        get_list_tweets(list_id) => endpoint::LIST_TWEETS;
        /// Followers of a list.
        get_list_followers(list_id) => endpoint::LIST_FOLLOWERS;
        /// Members of a list.
        get_list_member(list_id) => endpoint::LIST_MEMBER;
    }

    // Job endpoints

    /// Details of a job posting.
    pub async fn get_job_detail(&self, job_id: &str, simplify: bool) -> Option<Value> {
        self.call(
            &endpoint::JOB_DETAIL,
            job_id,
            &Page::default().simplify(simplify),
        )
        .await
    }

    paginated! {
        /// Jobs matching a keyword.
        search_job(keyword) => endpoint::JOB_SEARCH;
    }

    /// Job locations matching `query`, for use with job search.
    pub async fn search_job_location(&self, query: &str) -> Option<Value> {
        self.call(&endpoint::JOB_SEARCH_LOCATION, query, &Page::default())
            .await
    }
}

//! Unofficial client for the RapidAPI Twitter API (`twitter-x-api`).
//!
//! ```no_run
//! use twittapi::{Page, TwitterApi};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let twitter = TwitterApi::new("<YOUR_X_RAPIDAPI_KEY>")?;
//! if let Some(user_id) = twitter.get_user_id_by_username("elonmusk").await {
//!     let tweets = twitter.get_user_tweets(&user_id, Page::default()).await;
//!     println!("{:?}", tweets);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod transport;
pub mod twitter;

pub use error::{ConfigError, RequestError};
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use twitter::client::TwitterApi;
pub use twitter::endpoint::{Endpoint, Page, ParamValue, ENDPOINTS};
pub use twitter::{api_key_tutorial, Authentication, ClientConfig};

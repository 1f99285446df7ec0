use crate::common::{CONTENT_TYPE_JSON_UTF8, TRANSACTION_SOURCE, TRANSACTION_SOURCE_HEADER};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to inject the `User-Agent`, `Content-Type` and `x-transaction-source`
/// headers into all outgoing requests.
pub struct InjectHeadersMiddleware {
    user_agent: HeaderValue,
}

impl InjectHeadersMiddleware {
    pub fn new() -> Self {
        Self {
            user_agent: HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}

impl Default for InjectHeadersMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for InjectHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_JSON_UTF8),
        );
        headers.insert(
            HeaderName::from_static(TRANSACTION_SOURCE_HEADER),
            HeaderValue::from_static(TRANSACTION_SOURCE),
        );

        next.run(req, extensions).await
    }
}

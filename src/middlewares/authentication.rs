use crate::auth::ApiKey;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the Basic `Authorization` header built from the API key
/// into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    pub(crate) api_key: ApiKey,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let mut header_value = HeaderValue::from_str(&self.api_key.basic_authorization())
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, header_value);

        next.run(req, extensions).await
    }
}

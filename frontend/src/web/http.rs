//! 基于 `gloo-net` 的 HTTP 传输层

use async_trait::async_trait;
use distro_admin::{ApiError, ApiResult, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use gloo_net::http::{Method, RequestBuilder};

/// 浏览器 fetch 传输
///
/// 只负责收发；令牌注入和 401 处理都在 `ApiClient` 中完成。
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&req.url).method(method);

        if !req.query.is_empty() {
            builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        for (k, v) in &req.headers {
            builder = builder.header(k, v);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Request Build Error: {}", e)))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Fetch Error: {}", e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Fetch Body Error: {}", e)))?;

        Ok(HttpResponse::new(status, body))
    }
}

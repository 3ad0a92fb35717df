use std::future::Future;

use mithai_shared::protocol::{
    ApiRequest, CreateProductRequest, DeleteProductRequest, ListProductsRequest, LoginRequest,
    RegisterRequest,
};
use mithai_shared::{AuthMode, Credentials, ErrorBody, NewProduct, Product, ProductId, Session};

use crate::error::{ApiError, ApiResult};
use crate::web::http::{BrowserHttpClient, HttpClient, HttpRequest};

/// 店面 REST 后端网关
#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontApi<C: HttpClient> {
    pub base_url: String,
    client: C,
}

pub type BrowserApi = StorefrontApi<BrowserHttpClient>;

impl<C: HttpClient> StorefrontApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个类型化请求
    ///
    /// 只有需要认证的端点才附带 `token`。
    pub async fn send<R: ApiRequest>(&self, req: &R, token: Option<&str>) -> ApiResult<R::Response> {
        let mut http = HttpRequest::new(&self.url(&req.path()), R::METHOD);

        if R::REQUIRES_AUTH {
            let token = token.ok_or(ApiError::MissingToken)?;
            http = http.with_bearer(token);
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_string(req).map_err(|e| ApiError::Encode(e.to_string()))?;
            http = http.with_json_body(body);
        }

        let res = self.client.send(http).await?;

        if !res.ok() {
            let message = serde_json::from_str::<ErrorBody>(&res.body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty());
            return Err(ApiError::Status {
                status: res.status,
                message,
            });
        }

        let body = if R::READS_BODY { res.body.as_str() } else { "null" };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 获取完整商品列表
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.send(&ListProductsRequest, None).await
    }

    /// 登录或注册，成功时返回会话
    pub async fn authenticate(&self, mode: AuthMode, credentials: Credentials) -> ApiResult<Session> {
        match mode {
            AuthMode::Login => self.send(&LoginRequest(credentials), None).await,
            AuthMode::Register => self.send(&RegisterRequest(credentials), None).await,
        }
    }

    pub async fn create_product(&self, token: Option<&str>, product: NewProduct) -> ApiResult<()> {
        self.send(&CreateProductRequest(product), token).await
    }

    pub async fn delete_product(&self, token: Option<&str>, id: ProductId) -> ApiResult<()> {
        self.send(&DeleteProductRequest { id }, token).await
    }

    /// 重新拉取商品列表
    ///
    /// `start` 在请求发出前立即调用，用于领取刷新代号 (generation)。
    pub async fn reload<G>(&self, start: impl FnOnce() -> G) -> (G, ApiResult<Vec<Product>>) {
        let generation = start();
        (generation, self.list_products().await)
    }

    /// 先执行管理员变更，再无条件刷新列表
    ///
    /// 变更失败只记录日志；刷新代号在变更完成之后才领取，
    /// 因此较晚完成的变更总是对应较新的列表。
    pub async fn mutate_then_reload<F, G>(
        &self,
        operation: &str,
        mutation: F,
        start: impl FnOnce() -> G,
    ) -> (G, ApiResult<Vec<Product>>)
    where
        F: Future<Output = ApiResult<()>>,
    {
        match mutation.await {
            Ok(()) => log_info!("Api", "{} succeeded", operation),
            Err(e) => log_error!("Api", "{} failed: {}", operation, e),
        }
        self.reload(start).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::{HttpError, MockHttpClient};
    use mithai_shared::Role;
    use mithai_shared::protocol::HttpMethod;
    use serde_json::json;

    const BASE: &str = "http://localhost:3000/api";

    fn api() -> StorefrontApi<MockHttpClient> {
        StorefrontApi::new(format!("{}/", BASE), MockHttpClient::new())
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "admin@mithai.in".to_string(),
            password: "secret".to_string(),
        }
    }

    fn sweets_json() -> serde_json::Value {
        json!([
            { "id": 1, "name": "Kaju Katli", "category": "Traditional", "price": 450,
              "stock": 25, "description": "Premium cashew sweet" },
            { "id": 9, "name": "Peda", "category": "Traditional", "price": 300.5,
              "stock": 4, "description": "Milk fudge", "imageUrl": "https://example.com/peda.png" }
        ])
    }

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Peda".to_string(),
            category: "Traditional".to_string(),
            price: 300.0,
            stock: 12,
            description: "Milk fudge".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_list_products() {
        let api = api();
        api.client.mock_response(HttpMethod::Get, &format!("{}/sweets", BASE), 200, sweets_json());

        let products = api.list_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name(), "Peda");
        assert!(products[1].is_limited());

        let sent = api.client.requests.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].headers.get("Authorization").is_none());
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn test_list_products_bad_json_is_decode_error() {
        let api = api();
        api.client.mock_raw(HttpMethod::Get, &format!("{}/sweets", BASE), 200, "<html>");

        let err = api.list_products().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_list_products_network_failure() {
        let api = api();
        api.client.mock_network_failure(HttpMethod::Get, &format!("{}/sweets", BASE));

        let err = api.list_products().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport(HttpError::NetworkError("Failed to fetch".to_string()))
        );
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Post,
            &format!("{}/auth/login", BASE),
            200,
            json!({
                "user": { "id": 1, "email": "admin@mithai.in", "role": "ADMIN" },
                "token": "jwt-token"
            }),
        );

        let session = api.authenticate(AuthMode::Login, credentials()).await.unwrap();

        assert_eq!(session.token, "jwt-token");
        assert_eq!(session.user.role, Role::Admin);

        let sent = api.client.requests.borrow();
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "email": "admin@mithai.in", "password": "secret" }));
        assert_eq!(sent[0].headers.get("Content-Type").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_register_uses_register_endpoint() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Post,
            &format!("{}/auth/register", BASE),
            201,
            json!({
                "user": { "id": 2, "email": "admin@mithai.in", "role": "USER" },
                "token": "fresh"
            }),
        );

        let session = api.authenticate(AuthMode::Register, credentials()).await.unwrap();
        assert_eq!(session.user.id, 2);
        assert_eq!(
            api.client.sent(),
            vec![("POST".to_string(), format!("{}/auth/register", BASE))]
        );
    }

    #[tokio::test]
    async fn test_auth_failure_carries_server_message() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Post,
            &format!("{}/auth/login", BASE),
            401,
            json!({ "error": "Invalid credentials" }),
        );

        let err = api.authenticate(AuthMode::Login, credentials()).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_auth_failure_without_error_field() {
        let api = api();
        api.client.mock_raw(HttpMethod::Post, &format!("{}/auth/login", BASE), 500, "oops");

        let err = api.authenticate(AuthMode::Login, credentials()).await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: None });
    }

    #[tokio::test]
    async fn test_create_attaches_bearer_and_ignores_body() {
        let api = api();
        api.client.mock_raw(HttpMethod::Post, &format!("{}/sweets", BASE), 201, "");

        api.create_product(Some("tok"), new_product()).await.unwrap();

        let sent = api.client.requests.borrow();
        assert_eq!(sent[0].headers.get("Authorization").unwrap(), "Bearer tok");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Peda");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_delete_targets_id_path() {
        let api = api();
        api.client.mock_raw(HttpMethod::Delete, &format!("{}/sweets/7", BASE), 204, "");

        api.delete_product(Some("tok"), 7).await.unwrap();

        let sent = api.client.requests.borrow();
        assert_eq!(sent[0].url, format!("{}/sweets/7", BASE));
        assert_eq!(sent[0].headers.get("Authorization").unwrap(), "Bearer tok");
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn test_mutation_without_token_is_not_sent() {
        let api = api();

        let err = api.delete_product(None, 7).await.unwrap_err();

        assert_eq!(err, ApiError::MissingToken);
        assert!(api.client.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reload_follows_successful_mutation() {
        let api = api();
        api.client.mock_raw(HttpMethod::Post, &format!("{}/sweets", BASE), 201, "{}");
        api.client.mock_response(HttpMethod::Get, &format!("{}/sweets", BASE), 200, sweets_json());

        let (_, reloaded) = api
            .mutate_then_reload(
                "create",
                api.create_product(Some("tok"), new_product()),
                || (),
            )
            .await;

        assert_eq!(reloaded.unwrap().len(), 2);
        assert_eq!(
            api.client.sent(),
            vec![
                ("POST".to_string(), format!("{}/sweets", BASE)),
                ("GET".to_string(), format!("{}/sweets", BASE)),
            ]
        );
    }

    #[tokio::test]
    async fn test_reload_follows_failed_mutation() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Delete,
            &format!("{}/sweets/3", BASE),
            403,
            json!({ "error": "Forbidden" }),
        );
        api.client.mock_response(HttpMethod::Get, &format!("{}/sweets", BASE), 200, sweets_json());

        let (_, reloaded) = api
            .mutate_then_reload("delete", api.delete_product(Some("tok"), 3), || ())
            .await;

        assert!(reloaded.is_ok());
        assert_eq!(
            api.client.sent(),
            vec![
                ("DELETE".to_string(), format!("{}/sweets/3", BASE)),
                ("GET".to_string(), format!("{}/sweets", BASE)),
            ]
        );
    }

    #[tokio::test]
    async fn test_reload_generation_is_taken_after_mutation_completes() {
        let api = api();
        api.client.mock_raw(HttpMethod::Delete, &format!("{}/sweets/3", BASE), 204, "");
        api.client.mock_response(HttpMethod::Get, &format!("{}/sweets", BASE), 200, sweets_json());

        let (seen_at_start, _) = api
            .mutate_then_reload("delete", api.delete_product(Some("tok"), 3), || {
                api.client.sent()
            })
            .await;

        assert_eq!(
            seen_at_start,
            vec![("DELETE".to_string(), format!("{}/sweets/3", BASE))]
        );
    }

    #[tokio::test]
    async fn test_plain_reload_starts_before_request() {
        let api = api();
        api.client.mock_response(HttpMethod::Get, &format!("{}/sweets", BASE), 200, sweets_json());

        let (seen_at_start, reloaded) = api.reload(|| api.client.sent().len()).await;

        assert_eq!(seen_at_start, 0);
        assert_eq!(reloaded.unwrap().len(), 2);
    }
}

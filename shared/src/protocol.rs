use crate::{AuthMode, Credentials, NewProduct, Product, ProductId, Session};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the API root (e.g. `http://localhost:3000/api`).
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or prefix, see [`ApiRequest::path`]).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token must be attached.
    const REQUIRES_AUTH: bool = false;
    /// `false` when the response body is ignored and decoded as `null`.
    const READS_BODY: bool = true;

    /// The concrete path for this request instance.
    fn path(&self) -> String {
        Self::PATH.to_string()
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// List the whole catalog
#[derive(Debug, Serialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const PATH: &'static str = "/sweets";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = Session;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    type Response = Session;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Create a product. The backend's reply is not used.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CreateProductRequest(pub NewProduct);

impl ApiRequest for CreateProductRequest {
    type Response = ();
    const PATH: &'static str = "/sweets";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = true;
    const READS_BODY: bool = false;
}

/// Delete a product by id
#[derive(Debug, Serialize)]
pub struct DeleteProductRequest {
    #[serde(skip)]
    pub id: ProductId,
}

impl ApiRequest for DeleteProductRequest {
    type Response = ();
    const PATH: &'static str = "/sweets";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const REQUIRES_AUTH: bool = true;
    const READS_BODY: bool = false;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.id)
    }
}

impl AuthMode {
    /// Endpoint path used to authenticate in this mode.
    pub fn path(&self) -> &'static str {
        match self {
            AuthMode::Login => LoginRequest::PATH,
            AuthMode::Register => RegisterRequest::PATH,
        }
    }
}

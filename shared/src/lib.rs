use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// Products with fewer units than this are flagged as limited in the shop.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Shown when a product has no image, or its image fails to load.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1514849302-984523450cf4?auto=format&fit=crop&w=800&q=80";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

pub type ProductId = i64;

/// Fields of a product as submitted by the admin panel (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: NewProduct,
}

impl Product {
    pub fn new(id: ProductId, fields: NewProduct) -> Self {
        Self { id, fields }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Presentation rule only; nothing enforces it on the inventory side.
    pub fn is_limited(&self) -> bool {
        self.fields.stock < LOW_STOCK_THRESHOLD
    }

    pub fn image_src(&self) -> &str {
        match self.fields.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => FALLBACK_IMAGE,
        }
    }

    /// Case-insensitive substring match on the name. An empty needle matches everything.
    pub fn name_matches(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty() || self.fields.name.to_lowercase().contains(needle_lowercase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The authenticated identity and its bearer token.
///
/// Returned by the login/register endpoints and persisted as-is, so the
/// stored value has the same `{user, token}` shape as the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Body returned by the backend alongside a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

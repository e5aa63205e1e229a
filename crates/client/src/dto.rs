//! Wire DTOs matching the backend REST shapes one to one.
//!
//! Field names follow the wire (`fname`, `last_page`, ...), not Rust
//! conventions; the client is a pass-through consumer and does not reshape
//! payloads. Timestamps stay strings for the same reason.

use serde::{Deserialize, Serialize};

use brewpos_auth::{Identity, Role};
use brewpos_core::{DomainError, ExpenseId, IngredientId, SaleId, UserId};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

/// User payload as the backend sends it: abbreviated name keys and a free
/// string role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: UserId,
    pub fname: String,
    pub lname: String,
    pub role: String,
}

impl UserDto {
    /// Build the typed identity. An unknown role string is rejected here,
    /// before anything reaches the session store.
    pub fn into_identity(self) -> Result<Identity, DomainError> {
        let role: Role = self.role.parse()?;
        Ok(Identity {
            user_id: self.id,
            first_name: self.fname,
            last_name: self.lname,
            role,
        })
    }
}

/// Payload of the restoration probe.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub user: UserDto,
}

/// `{status, message}` envelope returned by mutations and error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDto {
    pub id: IngredientId,
    pub name: String,
    pub stock: i64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIngredient {
    pub name: String,
    pub stock: i64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngredientUpdate {
    pub name: String,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDto {
    pub id: SaleId,
    pub order_type: String,
    /// Decimal amount as the backend formats it ("1250.00").
    pub total_amount: String,
    pub created_at: String,
}

impl SaleDto {
    pub fn amount(&self) -> f64 {
        self.total_amount.parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDto {
    pub id: ExpenseId,
    pub description: String,
    pub total_amount: String,
    pub created_at: String,
}

impl ExpenseDto {
    pub fn amount(&self) -> f64 {
        self.total_amount.parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub total_amount: f64,
}

/// Server-side page envelope shared by the paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub last_page: u32,
    pub total: u64,
}

/// `/sales/fetch` nests its page one level deeper than `/expenses/fetch`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesResponse {
    pub sales: PageEnvelope<SaleDto>,
}

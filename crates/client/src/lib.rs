//! `brewpos-client` — HTTP boundary to the backend REST API.
//!
//! A thin typed wrapper: requests go out exactly the way the backend
//! expects them and responses come back as wire-shaped DTOs. No business
//! logic lives here; the screens and the auth gateway decide what to do
//! with the data.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod token;

pub use api::{ApiClient, AuthApi, DateRange, PageQuery};
pub use config::ClientConfig;
pub use dto::{
    ApiMessage, ExpenseDto, IngredientDto, IngredientUpdate, LoginRequest, LoginResponse,
    NewExpense, NewIngredient, PageEnvelope, SaleDto, SessionResponse, UserDto,
};
pub use error::ApiError;
pub use token::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};

#![doc = include_str!("../README.md")]

pub mod aggregate;
pub mod alerts;
#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod auth;
pub mod clientes;
#[cfg(feature = "client")]
pub mod config;
pub mod consumos;
pub mod error;
pub mod estoque;
pub mod fechamentos;
pub mod guard;
pub mod produtos;
pub mod session;
pub mod token;
pub mod types;

// Re-exports for convenient access
pub use alerts::{Alerts, Toast, ToastKind};
#[cfg(feature = "client")]
pub use api::ApiClient;
#[cfg(feature = "client")]
pub use config::ConsoleConfig;
pub use error::Error;
pub use guard::{GuardDecision, RedirectTarget};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
pub use token::{decode_claims, normalize_role, Claims};
pub use types::{
    ClienteId, ConsumoId, EntradaEstoqueId, FechamentoId, Perfil, ProdutoId,
};

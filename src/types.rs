use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Client registry identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct ClienteId(pub i64);

/// Product catalog identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct ProdutoId(pub i64);

/// Consumption entry identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct ConsumoId(pub i64);

/// Stock entry ("lote") identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct EntradaEstoqueId(pub i64);

/// Billing closure identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct FechamentoId(pub i64);

/// Client profile as the backend reports it.
///
/// The backend may grow new profiles; unknown values deserialize to
/// [`Perfil::Desconhecido`] instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum Perfil {
    Comum,
    Socio,
    Parceiro,
    Desconhecido,
}

impl From<String> for Perfil {
    fn from(value: String) -> Self {
        match value.as_str() {
            "COMUM" => Perfil::Comum,
            "SOCIO" => Perfil::Socio,
            "PARCEIRO" => Perfil::Parceiro,
            _ => Perfil::Desconhecido,
        }
    }
}

//! Consumption entries and the per-client open account.

use serde::{Deserialize, Serialize};

use crate::types::{ClienteId, ConsumoId, EntradaEstoqueId, Perfil, ProdutoId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumoRequest {
    pub cliente_id: ClienteId,
    pub produto_id: ProdutoId,
    pub quantidade: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumo {
    pub id: ConsumoId,
    pub cliente_id: ClienteId,
    pub produto_id: ProdutoId,
    #[serde(default)]
    pub quantidade: i64,
    #[serde(default)]
    pub valor_unitario: f64,
    #[serde(default)]
    pub valor_total: f64,
    #[serde(default)]
    pub data_hora: String,
    #[serde(default)]
    pub pago: bool,
    #[serde(default)]
    pub entrada_estoque_id: Option<EntradaEstoqueId>,
}

/// One open-account line item as listed by `detalhar-conta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConsumo {
    #[serde(default)]
    pub nome_produto: String,
    #[serde(default)]
    pub quantidade: i64,
    #[serde(default)]
    pub valor_unitario: f64,
    #[serde(default)]
    pub valor_total: f64,
    /// ISO timestamp of the consumption.
    #[serde(default)]
    pub data_hora: String,
}

/// Full open-account view for one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalheConta {
    pub cliente_id: ClienteId,
    pub nome_cliente: String,
    pub perfil: Perfil,
    #[serde(default)]
    pub itens: Vec<ItemConsumo>,
    #[serde(default)]
    pub total: f64,
}

#[cfg(feature = "client")]
mod client {
    use futures_util::future::try_join_all;

    use super::*;
    use crate::api::ApiClient;
    use crate::error::Error;

    impl ApiClient {
        pub async fn registrar_consumo(&self, consumo: &ConsumoRequest) -> Result<Consumo, Error> {
            self.post_json("registrar consumo", "consumos", consumo).await
        }

        /// Registers several consumption entries as one request per item,
        /// issued concurrently. All-or-fail: any failure fails the batch and
        /// nothing already registered is rolled back.
        pub async fn registrar_consumos(
            &self,
            consumos: &[ConsumoRequest],
        ) -> Result<Vec<Consumo>, Error> {
            try_join_all(consumos.iter().map(|c| self.registrar_consumo(c))).await
        }

        pub async fn detalhar_conta(&self, cliente_id: ClienteId) -> Result<DetalheConta, Error> {
            self.get_json(
                "detalhar conta",
                &format!("consumos/detalhar-conta/{cliente_id}"),
            )
            .await
        }

        /// Open-account total, derived from [`detalhar_conta`](Self::detalhar_conta).
        pub async fn total_em_aberto(&self, cliente_id: ClienteId) -> Result<f64, Error> {
            Ok(self.detalhar_conta(cliente_id).await?.total)
        }

        /// Settles every open consumption of the client.
        pub async fn pagar_conta(&self, cliente_id: ClienteId) -> Result<(), Error> {
            self.post_unit(
                "pagar conta",
                &format!("consumos/pagar-conta/{cliente_id}"),
                &serde_json::json!({}),
            )
            .await
        }
    }
}

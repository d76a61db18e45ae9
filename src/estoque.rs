//! Stock entries ("lotes" de compra).

use serde::{Deserialize, Serialize};

use crate::types::{EntradaEstoqueId, ProdutoId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntradaEstoqueRequest {
    pub produto_id: ProdutoId,
    /// At least 1; the backend validates.
    pub quantidade: i64,
    pub preco_custo_unitario: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntradaEstoque {
    pub id: EntradaEstoqueId,
    pub produto_id: ProdutoId,
    #[serde(default)]
    pub quantidade: i64,
    #[serde(default)]
    pub preco_custo_unitario: f64,
    /// ISO timestamp of the purchase.
    #[serde(default)]
    pub data_compra: String,
    /// Remaining balance of this entry.
    #[serde(default)]
    pub saldo: i64,
}

#[cfg(feature = "client")]
mod client {
    use futures_util::future::try_join_all;

    use super::*;
    use crate::api::ApiClient;
    use crate::error::Error;

    impl ApiClient {
        pub async fn criar_entrada(
            &self,
            entrada: &EntradaEstoqueRequest,
        ) -> Result<EntradaEstoque, Error> {
            self.post_json("criar entrada de estoque", "estoque", entrada)
                .await
        }

        /// Registers several stock entries.
        ///
        /// There is no batch endpoint; one request per entry is issued
        /// concurrently and the batch only completes when all have resolved.
        /// Any failure fails the whole batch — entries that already landed are
        /// not rolled back.
        pub async fn criar_entradas_lote(
            &self,
            entradas: &[EntradaEstoqueRequest],
        ) -> Result<Vec<EntradaEstoque>, Error> {
            try_join_all(entradas.iter().map(|e| self.criar_entrada(e))).await
        }

        pub async fn listar_entradas_por_produto(
            &self,
            produto_id: ProdutoId,
        ) -> Result<Vec<EntradaEstoque>, Error> {
            self.get_json(
                "listar entradas por produto",
                &format!("estoque/produto/{produto_id}"),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrada_wire_format() {
        let json = r#"{"id":1,"produtoId":9,"quantidade":24,"precoCustoUnitario":3.1,"dataCompra":"2024-05-01T10:00:00","saldo":24}"#;
        let entrada: EntradaEstoque = serde_json::from_str(json).unwrap();
        assert_eq!(entrada.produto_id, ProdutoId(9));
        assert_eq!(entrada.saldo, 24);
    }

    #[test]
    fn missing_numerics_default_to_zero() {
        let json = r#"{"id":1,"produtoId":9}"#;
        let entrada: EntradaEstoque = serde_json::from_str(json).unwrap();
        assert_eq!(entrada.quantidade, 0);
        assert_eq!(entrada.preco_custo_unitario, 0.0);
        assert_eq!(entrada.saldo, 0);
    }
}

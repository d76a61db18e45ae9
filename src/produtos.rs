//! Product catalog.

use serde::{Deserialize, Serialize};

use crate::types::ProdutoId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoRequest {
    pub nome: String,
    /// Sale price in currency units (e.g. 12.34).
    pub preco_venda: f64,
    pub ativo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: ProdutoId,
    pub nome: String,
    #[serde(default)]
    pub preco_venda: f64,
    #[serde(default)]
    pub ativo: bool,
}

#[cfg(feature = "client")]
mod client {
    use super::*;
    use crate::api::ApiClient;
    use crate::error::Error;

    impl ApiClient {
        pub async fn listar_produtos(&self) -> Result<Vec<Produto>, Error> {
            self.get_json("listar produtos", "produtos").await
        }

        pub async fn obter_produto(&self, id: ProdutoId) -> Result<Produto, Error> {
            self.get_json("obter produto", &format!("produtos/{id}")).await
        }

        pub async fn criar_produto(&self, produto: &ProdutoRequest) -> Result<Produto, Error> {
            self.post_json("criar produto", "produtos", produto).await
        }

        pub async fn atualizar_produto(
            &self,
            id: ProdutoId,
            produto: &ProdutoRequest,
        ) -> Result<Produto, Error> {
            self.put_json("atualizar produto", &format!("produtos/{id}"), produto)
                .await
        }

        pub async fn remover_produto(&self, id: ProdutoId) -> Result<(), Error> {
            self.delete("remover produto", &format!("produtos/{id}")).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produto_wire_format() {
        let json = r#"{"id":9,"nome":"Cerveja","precoVenda":5.5,"ativo":true}"#;
        let produto: Produto = serde_json::from_str(json).unwrap();
        assert_eq!(produto.preco_venda, 5.5);
        assert!(produto.ativo);
    }
}

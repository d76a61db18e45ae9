//! Client registry.

use serde::{Deserialize, Serialize};

use crate::types::{ClienteId, Perfil};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    pub nome: String,
    pub email: String,
    pub celular: String,
    pub perfil: Perfil,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: ClienteId,
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub celular: String,
    pub perfil: Perfil,
}

#[cfg(feature = "client")]
mod client {
    use super::*;
    use crate::api::ApiClient;
    use crate::error::Error;

    impl ApiClient {
        pub async fn listar_clientes(&self) -> Result<Vec<Cliente>, Error> {
            self.get_json("listar clientes", "clientes").await
        }

        pub async fn obter_cliente(&self, id: ClienteId) -> Result<Cliente, Error> {
            self.get_json("obter cliente", &format!("clientes/{id}")).await
        }

        pub async fn criar_cliente(&self, cliente: &ClienteRequest) -> Result<Cliente, Error> {
            self.post_json("criar cliente", "clientes", cliente).await
        }

        pub async fn atualizar_cliente(
            &self,
            id: ClienteId,
            cliente: &ClienteRequest,
        ) -> Result<Cliente, Error> {
            self.put_json("atualizar cliente", &format!("clientes/{id}"), cliente)
                .await
        }

        pub async fn remover_cliente(&self, id: ClienteId) -> Result<(), Error> {
            self.delete("remover cliente", &format!("clientes/{id}")).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cliente_wire_format() {
        let json = r#"{"id":3,"nome":"Ana","email":"ana@example.com","celular":"11999990000","perfil":"SOCIO"}"#;
        let cliente: Cliente = serde_json::from_str(json).unwrap();
        assert_eq!(cliente.id, ClienteId(3));
        assert_eq!(cliente.perfil, Perfil::Socio);
    }

    #[test]
    fn request_serializes_camel_case() {
        let req = ClienteRequest {
            nome: "Ana".into(),
            email: "ana@example.com".into(),
            celular: "11999990000".into(),
            perfil: Perfil::Comum,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["perfil"], "COMUM");
        assert!(json.get("celular").is_some());
    }
}

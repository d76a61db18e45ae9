//! Billing closures, Pix payment generation and email delivery.

use serde::{Deserialize, Serialize};

use crate::types::{ClienteId, FechamentoId, ProdutoId};

/// One closure line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFechamento {
    pub produto_id: ProdutoId,
    #[serde(default)]
    pub nome_produto: String,
    #[serde(default)]
    pub quantidade: i64,
    #[serde(default)]
    pub valor_unitario: f64,
    #[serde(default)]
    pub valor_total: f64,
}

/// Closure summary as listed by `GET fechamentos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FechamentoResumo {
    pub id: FechamentoId,
    pub cliente_nome: String,
    /// Operator who closed the account.
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub data_hora: String,
    #[serde(default)]
    pub total: f64,
}

/// Full closure detail. The backend total is informational only; the amount
/// displayed and quoted to Pix comes from
/// [`aggregate::agrupar_itens_fechamento`](crate::aggregate::agrupar_itens_fechamento).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fechamento {
    pub id: FechamentoId,
    pub cliente_id: ClienteId,
    pub cliente_nome: String,
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub data_hora: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub itens: Vec<ItemFechamento>,
}

/// Optional filters for the closures list.
#[derive(Debug, Clone, Default)]
pub struct FechamentoFiltro {
    pub cliente_id: Option<ClienteId>,
    /// Start date, `YYYY-MM-DD` or a full ISO timestamp.
    pub de: Option<String>,
    /// End date, `YYYY-MM-DD` or a full ISO timestamp.
    pub ate: Option<String>,
}

impl FechamentoFiltro {
    /// Query pairs for the list endpoint. Date-only bounds are widened to the
    /// start and end of their day.
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.cliente_id {
            pairs.push(("clienteId", id.to_string()));
        }
        if let Some(de) = &self.de {
            pairs.push(("de", widen(de, "T00:00:00")));
        }
        if let Some(ate) = &self.ate {
            pairs.push(("ate", widen(ate, "T23:59:59")));
        }
        pairs
    }
}

fn widen(value: &str, bound: &str) -> String {
    if value.len() == 10 {
        format!("{value}{bound}")
    } else {
        value.to_owned()
    }
}

/// Request for sending a closed account by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvioContaEmail {
    pub para: String,
    pub nome: String,
    pub valor: f64,
    pub descricao: String,
    /// Attach the Pix QR (PNG) and payload (TXT) to the message.
    pub anexar_documentos: bool,
}

#[cfg(feature = "client")]
mod client {
    use super::*;
    use crate::api::ApiClient;
    use crate::error::Error;

    impl ApiClient {
        /// Closes the whole open account of a client, creating a closure.
        pub async fn fechar_conta(&self, cliente_id: ClienteId) -> Result<Fechamento, Error> {
            self.post_json(
                "fechar conta",
                &format!("fechamentos/fechar/{cliente_id}"),
                &serde_json::json!({}),
            )
            .await
        }

        pub async fn listar_fechamentos(
            &self,
            filtro: &FechamentoFiltro,
        ) -> Result<Vec<FechamentoResumo>, Error> {
            self.get_json_query("listar fechamentos", "fechamentos", &filtro.query())
                .await
        }

        pub async fn obter_fechamento(&self, id: FechamentoId) -> Result<Fechamento, Error> {
            self.get_json("obter fechamento", &format!("fechamentos/{id}"))
                .await
        }

        /// Pix QR code (PNG bytes) for an amount. The amount should be the
        /// client-side aggregated total of the closure.
        pub async fn pix_qr_code(&self, valor: f64, descricao: &str) -> Result<Vec<u8>, Error> {
            let request = self
                .http()
                .get(self.endpoint("pix/qrcode"))
                .query(&[("valor", valor.to_string()), ("descricao", descricao.into())]);
            let response = self.send("gerar QR code Pix", request).await?;
            Ok(response.bytes().await?.to_vec())
        }

        /// Pix "copia e cola" payload for an amount.
        pub async fn pix_payload(&self, valor: f64, descricao: &str) -> Result<String, Error> {
            let request = self
                .http()
                .get(self.endpoint("pix/payload"))
                .query(&[("valor", valor.to_string()), ("descricao", descricao.into())]);
            let response = self.send("gerar payload Pix", request).await?;
            response.text().await.map_err(Into::into)
        }

        /// Emails the closed account to the client, optionally attaching the
        /// Pix documents.
        pub async fn enviar_conta_por_email(&self, envio: &EnvioContaEmail) -> Result<(), Error> {
            self.post_unit("enviar conta por email", "email/enviar-conta", envio)
                .await
        }
    }
}

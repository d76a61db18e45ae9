//! Client-side grouping of flat line-item lists for the detail views.
//!
//! Both functions are pure: the backend sends flat arrays, the console groups
//! them for display and recomputes every total it shows. The recomputed
//! closure total is the amount quoted to the Pix generator and the email
//! sender, whatever total the backend supplied.

use std::collections::BTreeMap;

use crate::consumos::ItemConsumo;
use crate::fechamentos::ItemFechamento;

/// One aggregated row of a consumption day group.
#[derive(Debug, Clone, PartialEq)]
pub struct LinhaDia {
    pub nome_produto: String,
    pub quantidade: i64,
    /// Unit price of the first item seen for this row's key, never averaged.
    pub valor_unitario: f64,
    pub valor_total: f64,
}

/// All rows of one calendar day, most recent day first in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct GrupoDia {
    /// Calendar day as `YYYY-MM-DD`; empty when the item timestamp was
    /// malformed or missing.
    pub data: String,
    pub linhas: Vec<LinhaDia>,
    pub subtotal: f64,
}

/// Groups open-account consumption items by (day, product name + unit price).
///
/// Rows within a day are sorted alphabetically by product name; days are
/// sorted descending. Each row accumulates quantity and total across matching
/// items; the day subtotal is the sum of its row totals.
#[must_use]
pub fn agrupar_por_dia(itens: &[ItemConsumo]) -> Vec<GrupoDia> {
    let mut por_dia: BTreeMap<String, Vec<LinhaDia>> = BTreeMap::new();

    for item in itens {
        let linhas = por_dia.entry(dia_de(&item.data_hora)).or_default();
        let existente = linhas.iter_mut().find(|l| {
            l.nome_produto == item.nome_produto && l.valor_unitario == item.valor_unitario
        });
        match existente {
            Some(linha) => {
                linha.quantidade += item.quantidade;
                linha.valor_total += item.valor_total;
            }
            None => linhas.push(LinhaDia {
                nome_produto: item.nome_produto.clone(),
                quantidade: item.quantidade,
                valor_unitario: item.valor_unitario,
                valor_total: item.valor_total,
            }),
        }
    }

    por_dia
        .into_iter()
        .rev()
        .map(|(data, mut linhas)| {
            linhas.sort_by(|a, b| a.nome_produto.cmp(&b.nome_produto));
            let subtotal = linhas.iter().map(|l| l.valor_total).sum();
            GrupoDia {
                data,
                linhas,
                subtotal,
            }
        })
        .collect()
}

/// Calendar-day key from an ISO timestamp; malformed values degenerate to an
/// empty bucket key instead of failing.
fn dia_de(data_hora: &str) -> String {
    data_hora.get(..10).unwrap_or("").to_owned()
}

/// Closure items re-grouped by product id, with the authoritative total.
#[derive(Debug, Clone, PartialEq)]
pub struct FechamentoAgregado {
    /// One row per product id, in first-seen order.
    pub itens: Vec<ItemFechamento>,
    /// Sum of the aggregated row totals, independent of any backend total.
    pub total: f64,
}

/// Groups closure line items by product id.
///
/// Quantities and totals accumulate; the unit price stays the one from the
/// first item of each product. The grand total is recomputed from the rows.
#[must_use]
pub fn agrupar_itens_fechamento(itens: &[ItemFechamento]) -> FechamentoAgregado {
    let mut agrupados: Vec<ItemFechamento> = Vec::new();

    for item in itens {
        match agrupados.iter_mut().find(|a| a.produto_id == item.produto_id) {
            Some(acumulado) => {
                acumulado.quantidade += item.quantidade;
                acumulado.valor_total += item.valor_total;
            }
            None => agrupados.push(item.clone()),
        }
    }

    let total = agrupados.iter().map(|i| i.valor_total).sum();
    FechamentoAgregado {
        itens: agrupados,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProdutoId;

    fn item(nome: &str, qtd: i64, vu: f64, total: f64, data_hora: &str) -> ItemConsumo {
        ItemConsumo {
            nome_produto: nome.to_owned(),
            quantidade: qtd,
            valor_unitario: vu,
            valor_total: total,
            data_hora: data_hora.to_owned(),
        }
    }

    #[test]
    fn same_product_same_day_accumulates() {
        let grupos = agrupar_por_dia(&[
            item("Cerveja", 2, 5.0, 10.0, "2024-01-01T20:15:00"),
            item("Cerveja", 1, 5.0, 5.0, "2024-01-01T22:40:00"),
        ]);

        assert_eq!(grupos.len(), 1);
        assert_eq!(grupos[0].data, "2024-01-01");
        assert_eq!(grupos[0].linhas.len(), 1);
        let linha = &grupos[0].linhas[0];
        assert_eq!(linha.nome_produto, "Cerveja");
        assert_eq!(linha.quantidade, 3);
        assert_eq!(linha.valor_unitario, 5.0);
        assert_eq!(linha.valor_total, 15.0);
        assert_eq!(grupos[0].subtotal, 15.0);
    }

    #[test]
    fn days_ordered_most_recent_first() {
        let grupos = agrupar_por_dia(&[
            item("Suco", 1, 8.0, 8.0, "2024-01-01T12:00:00"),
            item("Suco", 1, 8.0, 8.0, "2024-01-02T12:00:00"),
        ]);

        assert_eq!(grupos.len(), 2);
        assert_eq!(grupos[0].data, "2024-01-02");
        assert_eq!(grupos[1].data, "2024-01-01");
    }

    #[test]
    fn rows_sorted_alphabetically_within_day() {
        let grupos = agrupar_por_dia(&[
            item("Porção de fritas", 1, 20.0, 20.0, "2024-03-10T19:00:00"),
            item("Cerveja", 2, 5.0, 10.0, "2024-03-10T19:05:00"),
        ]);

        let nomes: Vec<&str> = grupos[0]
            .linhas
            .iter()
            .map(|l| l.nome_produto.as_str())
            .collect();
        assert_eq!(nomes, vec!["Cerveja", "Porção de fritas"]);
        assert_eq!(grupos[0].subtotal, 30.0);
    }

    #[test]
    fn different_unit_prices_stay_separate_rows() {
        let grupos = agrupar_por_dia(&[
            item("Cerveja", 1, 5.0, 5.0, "2024-01-01T12:00:00"),
            item("Cerveja", 1, 6.0, 6.0, "2024-01-01T13:00:00"),
        ]);

        assert_eq!(grupos[0].linhas.len(), 2);
        assert_eq!(grupos[0].subtotal, 11.0);
    }

    #[test]
    fn malformed_timestamp_goes_to_empty_bucket() {
        let grupos = agrupar_por_dia(&[
            item("Cerveja", 1, 5.0, 5.0, "hoje"),
            item("Cerveja", 1, 5.0, 5.0, ""),
            item("Suco", 1, 8.0, 8.0, "2024-01-01T12:00:00"),
        ]);

        assert_eq!(grupos.len(), 2);
        // Empty key sorts after real dates in descending order.
        assert_eq!(grupos[0].data, "2024-01-01");
        assert_eq!(grupos[1].data, "");
        assert_eq!(grupos[1].linhas[0].quantidade, 2);
    }

    fn item_fechamento(id: i64, nome: &str, qtd: i64, vu: f64, total: f64) -> ItemFechamento {
        ItemFechamento {
            produto_id: ProdutoId(id),
            nome_produto: nome.to_owned(),
            quantidade: qtd,
            valor_unitario: vu,
            valor_total: total,
        }
    }

    #[test]
    fn closure_items_grouped_by_product_id() {
        let agregado = agrupar_itens_fechamento(&[
            item_fechamento(1, "Cerveja", 2, 5.0, 10.0),
            item_fechamento(2, "Suco", 1, 8.0, 8.0),
            item_fechamento(1, "Cerveja", 3, 5.0, 15.0),
        ]);

        assert_eq!(agregado.itens.len(), 2);
        assert_eq!(agregado.itens[0].produto_id, ProdutoId(1));
        assert_eq!(agregado.itens[0].quantidade, 5);
        assert_eq!(agregado.itens[0].valor_total, 25.0);
        assert_eq!(agregado.itens[0].valor_unitario, 5.0);
        assert_eq!(agregado.total, 33.0);
    }

    #[test]
    fn grand_total_recomputed_from_rows() {
        // Backend-supplied totals are ignored by design; only line totals count.
        let agregado = agrupar_itens_fechamento(&[item_fechamento(7, "Água", 4, 3.5, 14.0)]);
        assert_eq!(agregado.total, 14.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(agrupar_por_dia(&[]).is_empty());
        let agregado = agrupar_itens_fechamento(&[]);
        assert!(agregado.itens.is_empty());
        assert_eq!(agregado.total, 0.0);
    }
}

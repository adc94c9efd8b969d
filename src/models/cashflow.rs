// src/models/cashflow.rs

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinela dos seletores de filtro: "sem filtro".
pub const FILTER_ALL: &str = "Todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Inflow,  // Entrada (agendamento concluído)
    Outflow, // Saída (despesa)
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Inflow => "Entrada",
            EntryKind::Outflow => "Saída",
        };
        f.write_str(label)
    }
}

/// Lançamento derivado do caixa. Nunca é persistido: é recomputado sob
/// demanda a partir das coleções de agendamentos e despesas.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
    /// "entrada-<id>" / "saida-<id>".
    pub id: String,
    pub source_id: Uuid,

    /// Instante cronológico; `None` é a sentinela de data inválida
    /// (excluída de qualquer filtro por intervalo ativo).
    pub instant: Option<NaiveDateTime>,

    /// Texto de data exibido ("01/03/2025 às 14:00" ou "01/03/2025").
    pub date_label: String,

    pub description: String,
    pub details: String,
    pub kind: EntryKind,
    pub amount: Decimal,

    // Dimensões de filtro de conteúdo — presentes apenas em entradas.
    pub service: Option<String>,
    pub barber: Option<String>,
    pub payment: Option<String>,
}

/// Valores de um conjunto de filtros do caixa. O intervalo de datas só é
/// considerado ativo quando as duas pontas estão preenchidas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterValues {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub service: String,
    pub barber: String,
    pub payment: String,
}

impl Default for FilterValues {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            service: FILTER_ALL.to_string(),
            barber: FILTER_ALL.to_string(),
            payment: FILTER_ALL.to_string(),
        }
    }
}

impl FilterValues {
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Estado de filtros em dois níveis: os seletores editam o rascunho e só
/// o "Aplicar Filtros" promove os valores para o conjunto ativo.
#[derive(Debug, Clone, Default)]
pub struct CashFlowFilters {
    pub draft: FilterValues,
    pub applied: FilterValues,
}

impl CashFlowFilters {
    pub fn apply(&mut self) {
        self.applied = self.draft.clone();
    }

    pub fn clear(&mut self) {
        self.draft = FilterValues::default();
        self.applied = FilterValues::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn rascunho_so_vale_depois_de_aplicar() {
        let mut filters = CashFlowFilters::default();
        filters.draft.service = "Corte".to_string();
        filters.draft.start = NaiveDate::from_ymd_opt(2025, 3, 1);
        filters.draft.end = NaiveDate::from_ymd_opt(2025, 3, 31);

        // Editar o rascunho não muda o conjunto ativo.
        assert_eq!(filters.applied, FilterValues::default());

        filters.apply();
        assert_eq!(filters.applied.service, "Corte");
        assert!(filters.applied.date_range().is_some());

        filters.clear();
        assert_eq!(filters.draft, FilterValues::default());
        assert_eq!(filters.applied, FilterValues::default());
    }

    #[test]
    fn intervalo_exige_as_duas_pontas() {
        let mut values = FilterValues::default();
        values.start = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(values.date_range(), None);

        values.end = NaiveDate::from_ymd_opt(2025, 3, 31);
        assert!(values.date_range().is_some());
    }
}

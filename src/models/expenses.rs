// src/models/expenses.rs

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Diversos,
    Fixa,
    Produtos,
    Contas,
    Salarios, // Salários
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        ExpenseCategory::Diversos
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Diversos => "Diversos",
            ExpenseCategory::Fixa => "Fixa",
            ExpenseCategory::Produtos => "Produtos",
            ExpenseCategory::Contas => "Contas",
            ExpenseCategory::Salarios => "Salários",
        };
        f.write_str(label)
    }
}

/// Despesa avulsa, com granularidade de dia. Ciclo de vida independente
/// dos agendamentos — nenhum invariante liga as duas coleções.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExpensePayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    // Texto livre ("150,00"); canonicalizado na entrada.
    #[validate(length(min = 1, message = "O valor é obrigatório."))]
    pub amount: String,

    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub category: ExpenseCategory,
}

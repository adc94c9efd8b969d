// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::common::money;

/// Serviço do catálogo. Agendamentos guardam um snapshot destes campos,
/// nunca uma referência viva — alterar o catálogo não altera reservas já
/// compostas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,

    // Código de exibição sequencial ("01", "02", ...). Derivado do maior
    // código numérico existente, então exclusões deixam lacunas.
    pub code: String,

    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i64,
}

impl Service {
    pub fn price_display(&self) -> String {
        money::format_brl(self.price)
    }

    pub fn duration_display(&self) -> String {
        money::format_duration(self.duration_minutes)
    }
}

// Dados de cadastro/alteração. Valor e tempo chegam como texto livre
// ("R$ 30,00", "0h 30min") e são canonicalizados pelo serviço.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServicePayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    #[validate(length(min = 1, message = "O valor é obrigatório."))]
    pub price: String,

    #[validate(length(min = 1, message = "O tempo é obrigatório."))]
    pub duration: String,
}

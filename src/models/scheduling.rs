// src/models/scheduling.rs

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::common::{labels, money};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,   // pendente
    Completed, // concluído
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Pix,
    Cash,       // Dinheiro
    DebitCard,  // Cartão de Débito
    CreditCard, // Cartão de Crédito
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::DebitCard => "Cartão de Débito",
            PaymentMethod::CreditCard => "Cartão de Crédito",
        };
        f.write_str(label)
    }
}

/// Texto exibido quando a forma de pagamento ainda não foi definida.
pub const PAYMENT_PENDING: &str = "Pagamento Pendente";

pub fn payment_display(payment: &Option<PaymentMethod>) -> String {
    match payment {
        Some(method) => method.to_string(),
        None => PAYMENT_PENDING.to_string(),
    }
}

// --- Structs ---

/// Snapshot de um serviço no momento da composição da reserva.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedService {
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i64,
}

/// Agendamento com campos tipados como fonte de verdade. `label` e
/// `summary` são projeções regeneradas a cada mutação do motor — é o que
/// os filtros e o caixa leem, preservando a semântica textual original.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub scheduled_at: NaiveDateTime,
    pub client: String,
    pub barber: String,
    pub services: Vec<BookedService>,
    pub total_price: Decimal,
    pub total_minutes: i64,
    pub payment: Option<PaymentMethod>,
    pub status: AppointmentStatus,

    // "DD/MM/YYYY às HH:MM - Cliente"
    pub label: String,
    // "Corte, Barba com Edson"
    pub summary: String,
}

impl Appointment {
    pub fn duration_display(&self) -> String {
        money::format_duration(self.total_minutes)
    }

    pub fn payment_display(&self) -> String {
        payment_display(&self.payment)
    }

    /// Regenera as projeções textuais a partir dos campos tipados.
    pub fn refresh_projections(&mut self) {
        self.label = labels::format_label(self.scheduled_at, &self.client);
        self.summary = render_summary(&self.services, &self.barber);
    }
}

/// "Svc1, Svc2 com Barbeiro" — o separador " com " é o que o caixa usa
/// para repartir serviço e barbeiro.
pub fn render_summary(services: &[BookedService], barber: &str) -> String {
    let descriptions: Vec<&str> = services.iter().map(|s| s.description.as_str()).collect();
    format!("{} com {}", descriptions.join(", "), barber)
}

// Dados de composição de uma reserva: linhas de serviço por descrição
// (resolvidas contra o catálogo), cliente, barbeiro e instante.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppointmentPayload {
    #[validate(length(min = 1, message = "O cliente é obrigatório."))]
    pub client: String,

    #[validate(length(min = 1, message = "O barbeiro é obrigatório."))]
    pub barber: String,

    pub scheduled_at: Option<NaiveDateTime>,

    pub service_lines: Vec<String>,

    pub payment: Option<PaymentMethod>,

    // Só usado em alterações: quando ausente, o status atual é preservado.
    pub status: Option<AppointmentStatus>,
}

// --- Filtro de período ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    /// Comparação textual exata entre o componente de data do rótulo e a
    /// string "hoje" fornecida pelo chamador. Deliberadamente frágil —
    /// comportamento observável herdado, mantido.
    Daily { today: String },

    /// Semana de domingo a sábado contendo a data de referência.
    Weekly { reference: NaiveDate },

    /// Intervalo inclusivo de dias [start, end].
    Range { start: NaiveDate, end: NaiveDate },
}

/// Agregados calculados sobre o filtro ativo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub pending: usize,
    pub completed: usize,
    pub revenue: Decimal,
}

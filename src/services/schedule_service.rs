// src/services/schedule_service.rs

use chrono::{Datelike, Duration, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, labels},
    models::scheduling::{
        Appointment, AppointmentPayload, AppointmentStatus, BookedService, Period,
        ScheduleSummary,
    },
    services::catalog_service::CatalogService,
};

/// Motor de agendamentos: composição de reservas multi-serviço, ciclo de
/// vida (pendente -> concluído), filtros por período e agregados.
#[derive(Debug, Default)]
pub struct ScheduleService {
    appointments: Vec<Appointment>,
}

impl ScheduleService {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    //  1. COMPOSIÇÃO DA RESERVA
    // =========================================================================

    /// Compõe e grava um agendamento. Toda linha de serviço precisa
    /// resolver no catálogo; cliente, barbeiro e instante são
    /// obrigatórios. Qualquer pendência aborta sem mutação parcial.
    pub fn book(
        &mut self,
        catalog: &CatalogService,
        payload: AppointmentPayload,
    ) -> Result<Appointment, AppError> {
        let (scheduled_at, services) = Self::compose(catalog, &payload)?;

        let mut appointment = Appointment {
            id: Uuid::new_v4(),
            scheduled_at,
            client: payload.client.trim().to_string(),
            barber: payload.barber.trim().to_string(),
            total_price: total_price(&services),
            total_minutes: total_minutes(&services),
            services,
            payment: payload.payment,
            status: payload.status.unwrap_or(AppointmentStatus::Pending),
            label: String::new(),
            summary: String::new(),
        };
        appointment.refresh_projections();

        tracing::info!("Agendamento criado: {}", appointment.label);
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Substituição completa dos campos mutáveis. O id nunca muda; o
    /// status atual é preservado a menos que o payload o defina.
    pub fn update(
        &mut self,
        id: Uuid,
        catalog: &CatalogService,
        payload: AppointmentPayload,
    ) -> Result<Appointment, AppError> {
        // Compõe antes de localizar: falha de validação não deixa o
        // registro meio-escrito.
        let (scheduled_at, services) = Self::compose(catalog, &payload)?;

        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::AppointmentNotFound)?;

        appointment.scheduled_at = scheduled_at;
        appointment.client = payload.client.trim().to_string();
        appointment.barber = payload.barber.trim().to_string();
        appointment.total_price = total_price(&services);
        appointment.total_minutes = total_minutes(&services);
        appointment.services = services;
        appointment.payment = payload.payment;
        if let Some(status) = payload.status {
            appointment.status = status;
        }
        appointment.refresh_projections();

        Ok(appointment.clone())
    }

    fn compose(
        catalog: &CatalogService,
        payload: &AppointmentPayload,
    ) -> Result<(NaiveDateTime, Vec<BookedService>), AppError> {
        payload.validate()?;

        let scheduled_at = payload
            .scheduled_at
            .ok_or_else(|| validation_error("scheduledAt", "A data/hora é obrigatória."))?;

        if payload.service_lines.is_empty() {
            return Err(validation_error(
                "serviceLines",
                "Inclua ao menos um serviço.",
            ));
        }

        let mut services = Vec::with_capacity(payload.service_lines.len());
        for line in &payload.service_lines {
            let found = catalog.find_by_description(line).ok_or_else(|| {
                validation_error("serviceLines", "Selecione um serviço cadastrado.")
            })?;

            // Snapshot: alterações futuras do catálogo não afetam a reserva.
            services.push(BookedService {
                description: found.description.clone(),
                price: found.price,
                duration_minutes: found.duration_minutes,
            });
        }

        Ok((scheduled_at, services))
    }

    // =========================================================================
    //  2. CICLO DE VIDA
    // =========================================================================

    /// pendente -> concluído, sem caminho de volta. Concluir um
    /// agendamento já concluído é no-op benigno (idempotente).
    pub fn complete(&mut self, id: Uuid) -> Result<(), AppError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::AppointmentNotFound)?;

        appointment.status = AppointmentStatus::Completed;
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), AppError> {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        if self.appointments.len() == before {
            return Err(AppError::AppointmentNotFound);
        }
        Ok(())
    }

    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    // =========================================================================
    //  3. FILTROS, ORDENAÇÃO E AGREGADOS
    // =========================================================================

    pub fn filter_by_period(&self, period: &Period) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| matches_period(a, period))
            .collect()
    }

    /// Pendentes do período, do instante mais próximo ao mais distante.
    /// A ordenação é estável: empates mantêm a ordem de inclusão — esta
    /// lista alimenta a fila de "próximo da vez".
    pub fn pending_sorted(&self, period: &Period) -> Vec<&Appointment> {
        let mut pending: Vec<&Appointment> = self
            .filter_by_period(period)
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .collect();
        pending.sort_by_key(|a| labels::sort_instant(&a.label));
        pending
    }

    pub fn completed(&self, period: &Period) -> Vec<&Appointment> {
        self.filter_by_period(period)
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .collect()
    }

    pub fn summary(&self, period: &Period) -> ScheduleSummary {
        let completed = self.completed(period);
        ScheduleSummary {
            pending: self.pending_sorted(period).len(),
            completed: completed.len(),
            revenue: completed.iter().map(|a| a.total_price).sum(),
        }
    }
}

fn matches_period(appointment: &Appointment, period: &Period) -> bool {
    match period {
        // Comparação textual exata com a string "hoje" do chamador.
        // Rótulo com data fora do formato simplesmente não bate.
        Period::Daily { today } => labels::date_component(&appointment.label) == today,

        Period::Weekly { reference } => {
            let start = *reference
                - Duration::days(i64::from(reference.weekday().num_days_from_sunday()));
            let end = start + Duration::days(6);
            match labels::parse_date(labels::date_component(&appointment.label)) {
                Some(date) => date >= start && date <= end,
                // Sentinela de data inválida: fora de filtros por intervalo.
                None => false,
            }
        }

        Period::Range { start, end } => {
            match labels::parse_date(labels::date_component(&appointment.label)) {
                Some(date) => date >= *start && date <= *end,
                None => false,
            }
        }
    }
}

fn total_price(services: &[BookedService]) -> Decimal {
    services.iter().map(|s| s.price).sum()
}

fn total_minutes(services: &[BookedService]) -> i64 {
    services.iter().map(|s| s.duration_minutes).sum()
}

// Erro de validação pontual no padrão do `validator`, para checagens que
// o derive não expressa (linha de serviço não resolvida etc.).
fn validation_error(field: &str, message: &str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut error = validator::ValidationError::new("invalid");
    error.message = Some(message.to_string().into());

    // Leak seguro para erro estático
    let static_field: &'static str = Box::leak(field.to_string().into_boxed_str());
    errors.add(static_field, error);

    AppError::ValidationError(errors)
}

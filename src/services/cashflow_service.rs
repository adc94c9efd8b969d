// src/services/cashflow_service.rs

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::{
    common::labels,
    models::cashflow::{CashFlowEntry, EntryKind, FilterValues, FILTER_ALL},
    models::expenses::Expense,
    models::scheduling::{Appointment, AppointmentStatus},
};

// Separador serviço/barbeiro dentro do resumo ("Corte, Barba com Edson").
const BARBER_SEPARATOR: &str = " com ";

const UNKNOWN_SERVICE: &str = "Serviço Desconhecido";
const UNKNOWN_CLIENT: &str = "Cliente Desconhecido";
const UNKNOWN_BARBER: &str = "Barbeiro Desconhecido";

/// Projeção do caixa: função pura das coleções de agendamentos e
/// despesas no momento da chamada. Não guarda estado nenhum — a visão é
/// recomputada a cada consulta, sem cache para invalidar.
pub struct CashFlowService;

impl CashFlowService {
    /// Sequência unificada de lançamentos, do mais recente para o mais
    /// antigo. Só agendamentos concluídos geram entrada; toda despesa
    /// gera saída, incondicionalmente.
    pub fn project(appointments: &[Appointment], expenses: &[Expense]) -> Vec<CashFlowEntry> {
        let mut entries: Vec<CashFlowEntry> = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .map(Self::inflow_from_appointment)
            .chain(expenses.iter().map(Self::outflow_from_expense))
            .collect();

        // Decrescente por instante; datas inválidas (sentinela) por último.
        entries.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        entries
    }

    fn inflow_from_appointment(appointment: &Appointment) -> CashFlowEntry {
        let (service_text, barber_text) = split_summary(&appointment.summary);
        let client = labels::parse_client(&appointment.label).unwrap_or(UNKNOWN_CLIENT);

        // Texto de data sem o cliente: o prefixo do rótulo canônico.
        let date_label = match appointment.label.split_once(" - ") {
            Some((prefix, _)) => prefix.to_string(),
            None => appointment.label.clone(),
        };

        CashFlowEntry {
            id: format!("entrada-{}", appointment.id),
            source_id: appointment.id,
            instant: labels::parse_instant(&appointment.label),
            date_label,
            description: service_text.to_string(),
            details: format!(
                "Cliente: {} | Barbeiro: {}",
                client,
                barber_text.unwrap_or("N/A")
            ),
            kind: EntryKind::Inflow,
            amount: appointment.total_price,
            service: Some(service_text.to_string()),
            barber: Some(barber_text.unwrap_or(UNKNOWN_BARBER).to_string()),
            payment: Some(appointment.payment_display()),
        }
    }

    fn outflow_from_expense(expense: &Expense) -> CashFlowEntry {
        CashFlowEntry {
            id: format!("saida-{}", expense.id),
            source_id: expense.id,
            // Despesas têm granularidade de dia: início do dia.
            instant: Some(expense.date.and_time(NaiveTime::MIN)),
            date_label: labels::format_date(expense.date),
            description: expense.description.clone(),
            details: format!("Categoria: {}", expense.category),
            kind: EntryKind::Outflow,
            amount: expense.amount,
            service: None,
            barber: None,
            payment: None,
        }
    }

    /// Aplica o conjunto ativo de filtros: intervalo de datas (quando as
    /// duas pontas existem) E filtros de conteúdo. Conteúdo só restringe
    /// entradas — saídas não têm dimensão de serviço/barbeiro/pagamento.
    pub fn filter<'a>(
        entries: &'a [CashFlowEntry],
        filters: &FilterValues,
    ) -> Vec<&'a CashFlowEntry> {
        entries
            .iter()
            .filter(|entry| Self::matches(entry, filters))
            .collect()
    }

    fn matches(entry: &CashFlowEntry, filters: &FilterValues) -> bool {
        if let Some((start, end)) = filters.date_range() {
            match entry.instant {
                Some(instant) => {
                    // Comparação na granularidade de dia, bordas inclusas.
                    let day = instant.date();
                    if day < start || day > end {
                        return false;
                    }
                }
                // Data inválida: fora de qualquer intervalo ativo.
                None => return false,
            }
        }

        if entry.kind == EntryKind::Inflow {
            let service_ok = filters.service == FILTER_ALL
                || entry.service.as_deref() == Some(filters.service.as_str());
            let barber_ok = filters.barber == FILTER_ALL
                || entry.barber.as_deref() == Some(filters.barber.as_str());
            let payment_ok = filters.payment == FILTER_ALL
                || entry.payment.as_deref() == Some(filters.payment.as_str());
            return service_ok && barber_ok && payment_ok;
        }

        true
    }

    /// Total em caixa do conjunto filtrado: entradas − saídas. Recalculado
    /// do zero a cada consulta.
    pub fn total<'a, I>(entries: I) -> Decimal
    where
        I: IntoIterator<Item = &'a CashFlowEntry>,
    {
        entries.into_iter().fold(Decimal::ZERO, |acc, entry| {
            match entry.kind {
                EntryKind::Inflow => acc + entry.amount,
                EntryKind::Outflow => acc - entry.amount,
            }
        })
    }

    // --- Valores distintos para os seletores de filtro ---
    // Sempre prefixados com "Todos", na ordem em que aparecem (sem sort).

    pub fn distinct_services(appointments: &[Appointment]) -> Vec<String> {
        Self::distinct(appointments, |a| split_summary(&a.summary).0.to_string())
    }

    pub fn distinct_barbers(appointments: &[Appointment]) -> Vec<String> {
        Self::distinct(appointments, |a| {
            split_summary(&a.summary)
                .1
                .unwrap_or(UNKNOWN_BARBER)
                .to_string()
        })
    }

    pub fn distinct_payments(appointments: &[Appointment]) -> Vec<String> {
        Self::distinct(appointments, |a| a.payment_display())
    }

    fn distinct<F>(appointments: &[Appointment], extract: F) -> Vec<String>
    where
        F: Fn(&Appointment) -> String,
    {
        let mut values = vec![FILTER_ALL.to_string()];
        for appointment in appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
        {
            let value = extract(appointment);
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}

fn sort_key(entry: &CashFlowEntry) -> NaiveDateTime {
    entry.instant.unwrap_or(NaiveDateTime::MIN)
}

fn split_summary(summary: &str) -> (&str, Option<&str>) {
    match summary.split_once(BARBER_SEPARATOR) {
        Some((service, barber)) if !barber.is_empty() => {
            (non_empty_or(service, UNKNOWN_SERVICE), Some(barber))
        }
        Some((service, _)) => (non_empty_or(service, UNKNOWN_SERVICE), None),
        None => (non_empty_or(summary, UNKNOWN_SERVICE), None),
    }
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::ServicePayload;
    use crate::models::expenses::{ExpenseCategory, ExpensePayload};
    use crate::models::scheduling::{AppointmentPayload, PaymentMethod};
    use crate::services::catalog_service::CatalogService;
    use crate::services::expense_service::ExpenseService;
    use crate::services::schedule_service::ScheduleService;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    struct Fixture {
        catalog: CatalogService,
        schedule: ScheduleService,
        expenses: ExpenseService,
    }

    fn fixture() -> Fixture {
        let mut catalog = CatalogService::new();
        for (description, price, duration) in
            [("Corte", "30,00", "0h 30min"), ("Barba", "20,00", "0h 20min")]
        {
            catalog
                .add(ServicePayload {
                    description: description.to_string(),
                    price: price.to_string(),
                    duration: duration.to_string(),
                })
                .unwrap();
        }
        Fixture {
            catalog,
            schedule: ScheduleService::new(),
            expenses: ExpenseService::new(),
        }
    }

    fn book(
        fx: &mut Fixture,
        client: &str,
        barber: &str,
        day: u32,
        hour: u32,
        lines: &[&str],
        payment: Option<PaymentMethod>,
    ) -> uuid::Uuid {
        fx.schedule
            .book(
                &fx.catalog,
                AppointmentPayload {
                    client: client.to_string(),
                    barber: barber.to_string(),
                    scheduled_at: date(day).and_hms_opt(hour, 0, 0),
                    service_lines: lines.iter().map(|l| l.to_string()).collect(),
                    payment,
                    status: None,
                },
            )
            .unwrap()
            .id
    }

    fn spend(fx: &mut Fixture, description: &str, amount: &str, day: u32) {
        fx.expenses
            .add(ExpensePayload {
                description: description.to_string(),
                amount: amount.to_string(),
                date: Some(date(day)),
                category: ExpenseCategory::Produtos,
            })
            .unwrap();
    }

    #[test]
    fn cenario_caixa_do_dia() {
        // Agendamento concluído de 50,00 + despesa de 15,00 no mesmo dia.
        let mut fx = fixture();
        let id = book(&mut fx, "João", "Edson", 1, 14, &["Corte", "Barba"], Some(PaymentMethod::Pix));
        fx.schedule.complete(id).unwrap();
        spend(&mut fx, "Produtos de limpeza", "15,00", 1);

        let projected = CashFlowService::project(fx.schedule.list(), fx.expenses.list());

        let mut filters = FilterValues::default();
        filters.start = Some(date(1));
        filters.end = Some(date(1));
        let filtered = CashFlowService::filter(&projected, &filters);

        assert_eq!(filtered.len(), 2);
        // Decrescente: a entrada das 14:00 vem antes da despesa (00:00).
        assert_eq!(filtered[0].kind, EntryKind::Inflow);
        assert_eq!(filtered[0].description, "Corte, Barba");
        assert_eq!(filtered[0].details, "Cliente: João | Barbeiro: Edson");
        assert_eq!(filtered[0].date_label, "01/03/2025 às 14:00");
        assert_eq!(filtered[1].kind, EntryKind::Outflow);
        assert_eq!(filtered[1].details, "Categoria: Produtos");

        assert_eq!(
            CashFlowService::total(filtered.into_iter()),
            dec("35.00")
        );
    }

    #[test]
    fn pendentes_nunca_viram_entrada() {
        let mut fx = fixture();
        book(&mut fx, "João", "Edson", 1, 14, &["Corte"], None);

        let projected = CashFlowService::project(fx.schedule.list(), fx.expenses.list());
        assert!(projected.iter().all(|e| e.kind != EntryKind::Inflow));
        assert!(projected.is_empty());
    }

    #[test]
    fn ordenacao_decrescente_por_instante() {
        let mut fx = fixture();
        for (client, day, hour) in [("A", 1, 9), ("B", 3, 14), ("C", 2, 10)] {
            let id = book(&mut fx, client, "Edson", day, hour, &["Corte"], None);
            fx.schedule.complete(id).unwrap();
        }

        let projected = CashFlowService::project(fx.schedule.list(), fx.expenses.list());
        let labels: Vec<&str> = projected.iter().map(|e| e.date_label.as_str()).collect();
        assert_eq!(
            labels,
            ["03/03/2025 às 14:00", "02/03/2025 às 10:00", "01/03/2025 às 09:00"]
        );
    }

    #[test]
    fn filtros_de_conteudo_compoem_por_e_logico() {
        let mut fx = fixture();
        for (client, barber, lines) in [
            ("João", "Edson", &["Corte"][..]),
            ("Pedro", "Edson", &["Barba"][..]),
            ("Luís", "Marcos", &["Corte"][..]),
        ] {
            let id = book(&mut fx, client, barber, 1, 10, &lines, Some(PaymentMethod::Pix));
            fx.schedule.complete(id).unwrap();
        }

        let projected = CashFlowService::project(fx.schedule.list(), fx.expenses.list());

        let mut combined = FilterValues::default();
        combined.service = "Corte".to_string();
        combined.barber = "Edson".to_string();
        let both = CashFlowService::filter(&projected, &combined);

        // Mesmo resultado que aplicar um filtro e intersectar com o outro.
        let mut by_service = FilterValues::default();
        by_service.service = "Corte".to_string();
        let mut by_barber = FilterValues::default();
        by_barber.barber = "Edson".to_string();

        let service_ids: Vec<&str> = CashFlowService::filter(&projected, &by_service)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        let intersection: Vec<&str> = CashFlowService::filter(&projected, &by_barber)
            .iter()
            .map(|e| e.id.as_str())
            .filter(|id| service_ids.contains(id))
            .collect();

        let both_ids: Vec<&str> = both.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(both_ids, intersection);
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].details, "Cliente: João | Barbeiro: Edson");
    }

    #[test]
    fn saidas_passam_pelos_filtros_de_conteudo() {
        let mut fx = fixture();
        let id = book(&mut fx, "João", "Edson", 1, 14, &["Corte"], Some(PaymentMethod::Cash));
        fx.schedule.complete(id).unwrap();
        spend(&mut fx, "Produtos de limpeza", "15,00", 1);

        let projected = CashFlowService::project(fx.schedule.list(), fx.expenses.list());

        // Filtro de serviço que não bate com a entrada: sobra só a saída.
        let mut filters = FilterValues::default();
        filters.service = "Barba".to_string();
        let filtered = CashFlowService::filter(&projected, &filters);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, EntryKind::Outflow);
        assert_eq!(CashFlowService::total(filtered.into_iter()), dec("-15.00"));
    }

    #[test]
    fn data_invalida_fica_fora_quando_o_intervalo_esta_ativo() {
        let mut fx = fixture();
        let id = book(&mut fx, "João", "Edson", 1, 14, &["Corte"], None);
        fx.schedule.complete(id).unwrap();

        let mut appointments = fx.schedule.list().to_vec();
        // Rótulo corrompido à mão: instante vira sentinela.
        appointments[0].label = "um dia desses - João".to_string();

        let projected = CashFlowService::project(&appointments, fx.expenses.list());
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].instant, None);

        // Sem intervalo ativo, a entrada aparece.
        let no_range = CashFlowService::filter(&projected, &FilterValues::default());
        assert_eq!(no_range.len(), 1);

        // Com intervalo ativo, a sentinela é excluída.
        let mut filters = FilterValues::default();
        filters.start = Some(date(1));
        filters.end = Some(date(31));
        assert!(CashFlowService::filter(&projected, &filters).is_empty());
    }

    #[test]
    fn valores_distintos_em_ordem_de_aparicao() {
        let mut fx = fixture();
        for (client, barber, lines, payment) in [
            ("João", "Edson", &["Barba"][..], Some(PaymentMethod::Pix)),
            ("Pedro", "Marcos", &["Corte"][..], None),
            ("Luís", "Edson", &["Barba"][..], Some(PaymentMethod::Pix)),
        ] {
            let id = book(&mut fx, client, barber, 1, 10, &lines, payment);
            fx.schedule.complete(id).unwrap();
        }
        // Pendente não contribui para os seletores.
        book(&mut fx, "Zé", "Aurélio", 2, 10, &["Corte"], Some(PaymentMethod::CreditCard));

        let appointments = fx.schedule.list();
        assert_eq!(
            CashFlowService::distinct_services(appointments),
            ["Todos", "Barba", "Corte"]
        );
        assert_eq!(
            CashFlowService::distinct_barbers(appointments),
            ["Todos", "Edson", "Marcos"]
        );
        assert_eq!(
            CashFlowService::distinct_payments(appointments),
            ["Todos", "Pix", "Pagamento Pendente"]
        );
    }
}

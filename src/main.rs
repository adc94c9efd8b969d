//src/main.rs

use chrono::Local;

// Declaração dos nossos módulos
mod common;
mod config;
mod models;
mod services;

use crate::common::{error::AppError, labels};
use crate::config::AppState;
use crate::models::auth::{LoginUserPayload, RegisterUserPayload};
use crate::models::cashflow::CashFlowFilters;
use crate::models::catalog::ServicePayload;
use crate::models::expenses::{ExpenseCategory, ExpensePayload};
use crate::models::people::PersonPayload;
use crate::models::scheduling::{AppointmentPayload, PaymentMethod, Period};
use crate::services::cashflow_service::CashFlowService;
use crate::services::report_service::ReportService;

fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    let mut app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    tracing::info!("🚀 Sessão iniciada!");

    // Sessão de demonstração: nenhum dado sobrevive ao processo, então o
    // binário semeia um dia de movimento e imprime o resumo + relatórios.
    if let Err(e) = run_demo_session(&mut app_state) {
        tracing::error!("{}", e.user_message());
    }
}

fn run_demo_session(app: &mut AppState) -> Result<(), AppError> {
    let today = Local::now().date_naive();

    // --- IDENTIDADE ---
    // O motor confia que o login já aconteceu; aqui só exercitamos o
    // colaborador de identidade da sessão.
    app.auth.register_user(RegisterUserPayload {
        name: "Edson".to_string(),
        email: "edson@barber.com".to_string(),
        phone: Some("11 98888-0000".to_string()),
        password: "segredo1".to_string(),
    })?;
    let operator = app.auth.login_user(LoginUserPayload {
        email: "edson@barber.com".to_string(),
        password: "segredo1".to_string(),
    })?;
    tracing::info!("Bem vindo, {}!", operator.name);

    // --- CADASTROS ---
    app.catalog.add(ServicePayload {
        description: "Corte".to_string(),
        price: "R$ 30,00".to_string(),
        duration: "0h 30min".to_string(),
    })?;
    app.catalog.add(ServicePayload {
        description: "Barba".to_string(),
        price: "R$ 20,00".to_string(),
        duration: "0h 20min".to_string(),
    })?;

    let barber = app.barbers.add(PersonPayload {
        name: "Edson".to_string(),
        phone: "11 98888-0000".to_string(),
    })?;
    let customer = app.customers.add(PersonPayload {
        name: "João".to_string(),
        phone: "11 97777-0000".to_string(),
    })?;

    // --- AGENDA DO DIA ---
    let completed = app.schedule.book(
        &app.catalog,
        AppointmentPayload {
            client: customer.name.clone(),
            barber: barber.name.clone(),
            scheduled_at: today.and_hms_opt(14, 0, 0),
            service_lines: vec!["Corte".to_string(), "Barba".to_string()],
            payment: Some(PaymentMethod::Pix),
            status: None,
        },
    )?;
    app.schedule.complete(completed.id)?;

    app.schedule.book(
        &app.catalog,
        AppointmentPayload {
            client: "Pedro".to_string(),
            barber: barber.name.clone(),
            scheduled_at: today.and_hms_opt(16, 30, 0),
            service_lines: vec!["Corte".to_string()],
            payment: None,
            status: None,
        },
    )?;

    app.expenses.add(ExpensePayload {
        description: "Produtos de limpeza".to_string(),
        amount: "15,00".to_string(),
        date: Some(today),
        category: ExpenseCategory::Produtos,
    })?;

    // --- RESUMO DO DIA ---
    let period = Period::Daily {
        today: labels::format_date(today),
    };
    let summary = app.schedule.summary(&period);
    tracing::info!(
        "Hoje: {} pendente(s), {} concluído(s), faturamento {}",
        summary.pending,
        summary.completed,
        common::money::format_brl(summary.revenue)
    );

    // --- RELATÓRIOS DE CAIXA ---
    let projected = CashFlowService::project(app.schedule.list(), app.expenses.list());

    // Seletores em dois níveis: o rascunho só vale depois do "Aplicar".
    let mut filters = CashFlowFilters::default();
    filters.draft.start = Some(today);
    filters.draft.end = Some(today);
    filters.apply();

    let filtered = CashFlowService::filter(&projected, &filters.applied);
    let total = CashFlowService::total(filtered.iter().copied());

    let csv = app.reports.render_csv(&filtered, total);
    let csv_name = ReportService::file_name(today, "csv");
    if let Err(e) = std::fs::write(&csv_name, csv) {
        tracing::error!("Falha ao salvar {}: {}", csv_name, e);
    } else {
        tracing::info!("✅ Relatório salvo em {}", csv_name);
    }

    let period_title = ReportService::period_title(&filters.applied);
    match app.reports.render_pdf(&filtered, total, &period_title) {
        Ok(buffer) => {
            let pdf_name = ReportService::file_name(today, "pdf");
            if let Err(e) = std::fs::write(&pdf_name, buffer) {
                tracing::error!("Falha ao salvar {}: {}", pdf_name, e);
            } else {
                tracing::info!("✅ Relatório salvo em {}", pdf_name);
            }
        }
        // Sem a pasta de fontes o PDF não sai, mas a sessão continua.
        Err(e) => tracing::warn!("{}", e.user_message()),
    }

    tracing::info!("Total em caixa: {}", common::money::format_brl(total));
    Ok(())
}

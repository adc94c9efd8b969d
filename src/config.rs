// src/config.rs

use std::env;

use crate::services::{
    auth::{AuthService, InMemoryUserStore},
    catalog_service::CatalogService,
    expense_service::ExpenseService,
    people_service::{BarberService, CustomerService},
    report_service::ReportService,
    schedule_service::ScheduleService,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Nome da barbearia exibido no cabeçalho dos relatórios.
    pub shop_name: Option<String>,
    // Pasta com as fontes usadas pelo gerador de PDF.
    pub fonts_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            shop_name: env::var("SHOP_NAME").ok(),
            fonts_dir: env::var("FONTS_DIR").unwrap_or_else(|_| "./fonts".to_string()),
        }
    }
}

/// Contexto explícito da sessão. Cada coleção (catálogo, agenda,
/// despesas, cadastros) tem um único registro dono, todos montados aqui —
/// os componentes recebem referências em vez de alcançar estado global.
pub struct AppState {
    pub config: AppConfig,
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub schedule: ScheduleService,
    pub expenses: ExpenseService,
    pub customers: CustomerService,
    pub barbers: BarberService,
    pub reports: ReportService,
}

impl AppState {
    // A assinatura retorna um Result: se a montagem falhar, a aplicação
    // não deve iniciar.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        // --- Monta o gráfico de dependências ---
        let reports = ReportService::new(config.shop_name.clone(), config.fonts_dir.clone());
        let auth = AuthService::new(Box::new(InMemoryUserStore::new()));

        Ok(Self {
            config,
            auth,
            catalog: CatalogService::new(),
            schedule: ScheduleService::new(),
            expenses: ExpenseService::new(),
            customers: CustomerService::new(),
            barbers: BarberService::new(),
            reports,
        })
    }
}

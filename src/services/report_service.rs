// src/services/report_service.rs

use chrono::NaiveDate;
use genpdf::{elements, style, Alignment, Element};
use rust_decimal::Decimal;

use crate::{
    common::{error::AppError, labels, money},
    models::cashflow::{CashFlowEntry, EntryKind, FilterValues},
};

const CSV_HEADER: &str = "Data,Descrição,Detalhes,Tipo,Valor";

/// Renderização dos relatórios do caixa. Formatação pura da saída da
/// projeção — nenhuma regra de negócio mora aqui; salvar em disco é
/// responsabilidade do chamador.
#[derive(Debug, Clone)]
pub struct ReportService {
    shop_name: Option<String>,
    fonts_dir: String,
}

impl ReportService {
    pub fn new(shop_name: Option<String>, fonts_dir: String) -> Self {
        Self { shop_name, fonts_dir }
    }

    /// Título do período conforme o filtro ativo.
    pub fn period_title(filters: &FilterValues) -> String {
        match filters.date_range() {
            Some((start, end)) => format!(
                "de {} a {}",
                labels::format_date(start),
                labels::format_date(end)
            ),
            None => "Todos".to_string(),
        }
    }

    /// Nome sugerido do arquivo: `relatorio_caixa_DD-MM-YYYY.<ext>`.
    pub fn file_name(today: NaiveDate, extension: &str) -> String {
        format!(
            "relatorio_caixa_{}.{}",
            labels::format_date(today).replace('/', "-"),
            extension
        )
    }

    /// CSV com BOM (compatibilidade com Excel), campos entre aspas com
    /// escape de aspas internas, valor com sinal e última linha de total.
    pub fn render_csv(&self, entries: &[&CashFlowEntry], total: Decimal) -> String {
        let mut lines = Vec::with_capacity(entries.len() + 2);
        lines.push(CSV_HEADER.to_string());

        for entry in entries {
            let signed = match entry.kind {
                EntryKind::Inflow => entry.amount,
                EntryKind::Outflow => -entry.amount,
            };
            let fields = [
                entry.date_label.as_str(),
                entry.description.as_str(),
                entry.details.as_str(),
                &entry.kind.to_string(),
                &money::format_plain(signed),
            ];
            let quoted: Vec<String> = fields.iter().map(|f| quote(f)).collect();
            lines.push(quoted.join(","));
        }

        lines.push(format!(
            ",,,{},{}",
            quote("Total em Caixa:"),
            quote(&money::format_brl(total))
        ));

        format!("\u{FEFF}{}", lines.join("\n"))
    }

    /// Documento tabular paginado com os mesmos campos do CSV.
    pub fn render_pdf(
        &self,
        entries: &[&CashFlowEntry],
        total: Decimal,
        period_title: &str,
    ) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta configurada
        let font_family = genpdf::fonts::from_files(&self.fonts_dir, "Roboto", None)
            .map_err(|_| {
                AppError::FontNotFound(format!("Fonte não encontrada na pasta {}", self.fonts_dir))
            })?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title("Relatório de Caixa");
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        if let Some(shop_name) = &self.shop_name {
            doc.push(
                elements::Paragraph::new(shop_name.clone())
                    .styled(style::Style::new().bold().with_font_size(18)),
            );
            doc.push(elements::Break::new(1));
        }

        doc.push(
            elements::Paragraph::new("Relatório de Caixa")
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        doc.push(elements::Paragraph::new(format!("Período: {}", period_title)));
        doc.push(elements::Break::new(1.5));

        // --- TABELA DE LANÇAMENTOS ---
        // Pesos das colunas: Data (2), Descrição (3), Detalhes (4), Tipo (1), Valor (2)
        let mut table = elements::TableLayout::new(vec![2, 3, 4, 1, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Data").styled(style_bold))
            .element(elements::Paragraph::new("Descrição").styled(style_bold))
            .element(elements::Paragraph::new("Detalhes").styled(style_bold))
            .element(elements::Paragraph::new("Tipo").styled(style_bold))
            .element(elements::Paragraph::new("Valor").styled(style_bold))
            .push()
            .expect("Table error");

        for entry in entries {
            let sign = match entry.kind {
                EntryKind::Inflow => "+",
                EntryKind::Outflow => "-",
            };
            table
                .row()
                .element(elements::Paragraph::new(entry.date_label.clone()))
                .element(elements::Paragraph::new(entry.description.clone()))
                .element(elements::Paragraph::new(entry.details.clone()))
                .element(elements::Paragraph::new(entry.kind.to_string()))
                .element(elements::Paragraph::new(format!(
                    "{} R$ {}",
                    sign,
                    money::format_plain(entry.amount)
                )))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(2));

        // --- TOTAL ---
        let mut total_paragraph = elements::Paragraph::new(format!(
            "Total em Caixa: {}",
            money::format_brl(total)
        ));
        total_paragraph.set_alignment(Alignment::Right);
        doc.push(total_paragraph.styled(style::Style::new().bold().with_font_size(12)));

        // Renderiza para buffer (memória); salvar é com o chamador.
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

// src/common/labels.rs
//
// O rótulo canônico de um agendamento: `DD/MM/YYYY às HH:MM - <cliente>`.
// É a única string onde data, hora e cliente aparecem juntos, então a
// serialização e o parse precisam ser inversos exatos um do outro.

use chrono::{NaiveDate, NaiveDateTime};

const LABEL_FORMAT: &str = "%d/%m/%Y às %H:%M";
const DATE_FORMAT: &str = "%d/%m/%Y";
const CLIENT_SEPARATOR: &str = " - ";

/// Serializa o instante agendado + cliente no rótulo canônico.
pub fn format_label(scheduled_at: NaiveDateTime, client: &str) -> String {
    format!(
        "{}{}{}",
        scheduled_at.format(LABEL_FORMAT),
        CLIENT_SEPARATOR,
        client
    )
}

/// Inverso exato de `format_label`. Clientes contendo o separador " - "
/// são divididos na última ocorrência (mesma regra do app original).
pub fn parse_label(label: &str) -> Option<(NaiveDateTime, String)> {
    let (prefix, client) = label.rsplit_once(CLIENT_SEPARATOR)?;
    let scheduled_at = NaiveDateTime::parse_from_str(prefix, LABEL_FORMAT).ok()?;
    Some((scheduled_at, client.to_string()))
}

/// Parse leniente do instante: aceita o rótulo completo ou só o prefixo
/// `DD/MM/YYYY às HH:MM`. Entrada inválida vira `None` — a sentinela de
/// instante inválido, que ordena antes de qualquer instante válido e fica
/// fora de qualquer filtro por intervalo de datas. Nunca falha.
pub fn parse_instant(label: &str) -> Option<NaiveDateTime> {
    let prefix = match label.split_once(CLIENT_SEPARATOR) {
        Some((prefix, _)) => prefix,
        None => label,
    };
    NaiveDateTime::parse_from_str(prefix, LABEL_FORMAT).ok()
}

/// Chave de ordenação: instantes inválidos (sentinela) vêm primeiro.
pub fn sort_instant(label: &str) -> NaiveDateTime {
    parse_instant(label).unwrap_or(NaiveDateTime::MIN)
}

/// Nome do cliente: tudo depois do último " - " do rótulo.
pub fn parse_client(label: &str) -> Option<&str> {
    label
        .rsplit_once(CLIENT_SEPARATOR)
        .map(|(_, client)| client.trim())
        .filter(|client| !client.is_empty())
}

/// Componente de data do rótulo (texto antes do primeiro espaço).
/// É a chave de comparação textual do filtro diário.
pub fn date_component(label: &str) -> &str {
    label.split(' ').next().unwrap_or("")
}

/// Parse de uma data isolada `DD/MM/YYYY`. Inválida vira `None`.
pub fn parse_date(component: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(component, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

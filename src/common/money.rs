// src/common/money.rs
//
// Canonicalização de valores monetários (BRL) e durações ("Xh Ymin")
// digitados livremente. Política de leniência deliberada: entrada que não
// parseia vira zero, nunca erro — o fluxo de telas original depende disso
// para degradar sem quebrar a visão inteira.

use rust_decimal::Decimal;

/// Converte texto livre em valor decimal. Aceita vírgula ou ponto como
/// separador decimal, pontos de milhar e o prefixo "R$". Falha de parse
/// normaliza para zero (leniência, não bug silencioso).
pub fn parse_amount(input: &str) -> Decimal {
    let cleaned = input.replace("R$", "");
    let cleaned = cleaned.trim();

    // Com vírgula, assume formato pt-BR: pontos são milhar, vírgula é decimal.
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.to_string()
    };

    normalized.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Formata no padrão pt-BR completo: `R$ 1.234,56` (sinal antes do símbolo).
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let body = format!("R$ {},{}", group_thousands(int_part), frac_part);
    if negative { format!("-{}", body) } else { body }
}

/// Duas casas fixas com vírgula, sem símbolo nem milhar (células de tabela e CSV).
pub fn format_plain(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2)).replace('.', ",")
}

/// Converte "Xh Ymin" em minutos totais; qualquer componente pode faltar.
/// Texto irreconhecível vira zero.
pub fn parse_duration(input: &str) -> i64 {
    let mut hours: i64 = 0;
    let mut minutes: i64 = 0;

    for token in input.split_whitespace() {
        if let Some(value) = token.strip_suffix("min") {
            minutes = value.parse().unwrap_or(0);
        } else if let Some(value) = token.strip_suffix('h') {
            hours = value.parse().unwrap_or(0);
        }
    }

    hours * 60 + minutes
}

/// Inverso de `parse_duration`: renormaliza para `Hh Mmin` com M em [0, 59].
pub fn format_duration(total_minutes: i64) -> String {
    format!("{}h {}min", total_minutes / 60, total_minutes % 60)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parse_aceita_virgula_ponto_e_prefixo() {
        assert_eq!(parse_amount("30,00"), dec("30.00"));
        assert_eq!(parse_amount("30.00"), dec("30.00"));
        assert_eq!(parse_amount("R$ 1.234,56"), dec("1234.56"));
        assert_eq!(parse_amount("  25,5"), dec("25.5"));
    }

    #[test]
    fn parse_invalido_normaliza_para_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("R$"), Decimal::ZERO);
    }

    #[test]
    fn formatacao_brl_com_milhar() {
        assert_eq!(format_brl(dec("1234.56")), "R$ 1.234,56");
        assert_eq!(format_brl(dec("35")), "R$ 35,00");
        assert_eq!(format_brl(dec("-15.5")), "-R$ 15,50");
        assert_eq!(format_brl(dec("1234567.8")), "R$ 1.234.567,80");
    }

    #[test]
    fn formatacao_plana_para_tabelas() {
        assert_eq!(format_plain(dec("50")), "50,00");
        assert_eq!(format_plain(dec("-15")), "-15,00");
    }

    #[test]
    fn duracao_parse_e_formatacao() {
        assert_eq!(parse_duration("0h 30min"), 30);
        assert_eq!(parse_duration("2h"), 120);
        assert_eq!(parse_duration("45min"), 45);
        assert_eq!(parse_duration("sem tempo"), 0);
        assert_eq!(format_duration(50), "0h 50min");
        // Renormalização: 30min + 50min = 80min vira 1h 20min.
        assert_eq!(format_duration(80), "1h 20min");
    }
}

// src/common/codes.rs

/// Próximo código de exibição de um cadastro: maior código numérico
/// existente + 1, com dois dígitos ("01" em coleção vazia). A sequência
/// deriva do máximo atual, então códigos excluídos deixam lacunas e não
/// são reutilizados.
pub fn next_code<'a, I>(codes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = codes
        .into_iter()
        .filter_map(|code| {
            let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse::<u32>().ok()
        })
        .max()
        .unwrap_or(0);

    format!("{:02}", max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comeca_em_01_e_avanca_pelo_maximo() {
        assert_eq!(next_code([]), "01");
        assert_eq!(next_code(["01"]), "02");
        // Lacuna após exclusão: o próximo vem do máximo, não do tamanho.
        assert_eq!(next_code(["01", "05"]), "06");
        assert_eq!(next_code(["xx", "02"]), "03");
    }
}

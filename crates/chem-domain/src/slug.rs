/// Normaliza un nombre para usarlo en ids y nombres de archivo: conserva sólo
/// caracteres alfanuméricos, `-` y `_`, y pasa a minúsculas.
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify_strips_and_lowercases() {
        assert_eq!(slugify("Aspirin"), "aspirin");
        assert_eq!(slugify("Lysergic Acid"), "lysergicacid");
        assert_eq!(slugify("Palau'amine"), "palauamine");
        assert_eq!(slugify("Prostaglandin F2a"), "prostaglandinf2a");
        assert_eq!(slugify("BMS/Pfizer"), "bmspfizer");
        assert_eq!(slugify("n-BuLi_x"), "n-buli_x");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Wöhler"), "whler");
        assert_eq!(slugify(""), "");
    }
}

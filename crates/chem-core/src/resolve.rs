//! Resolución de identificadores con niveles de fallback explícitos.
//!
//! Orden de resolución para `resolve(ids, preferido, fallback)`:
//! 1. `Exact`: primer identificador del tipo preferido con valor no vacío.
//! 2. `GenericLabel`: sólo si se pide un nombre y existe una estructura; se
//!    devuelve la etiqueta genérica (`"Chemical Product"`).
//! 3. `Default`: el valor de fallback que aporta el llamador (`"C"` para
//!    estructuras, `"Unknown Molecule {n}"` para nombres).
//!
//! Nunca falla: la fuente es parcial y el pipeline degrada en vez de
//! rechazar.
use chem_domain::{IdentifierKind, TypedIdentifier};

use crate::constants::GENERIC_PRODUCT_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    Exact(IdentifierKind),
    GenericLabel,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: String,
    pub tier: ResolutionTier,
}

impl Resolution {
    /// `true` si el valor proviene de un identificador real del tipo pedido.
    pub fn is_exact(&self) -> bool {
        matches!(self.tier, ResolutionTier::Exact(_))
    }

    pub fn matched_kind(&self) -> Option<IdentifierKind> {
        match self.tier {
            ResolutionTier::Exact(kind) => Some(kind),
            ResolutionTier::GenericLabel => Some(IdentifierKind::Structure),
            ResolutionTier::Default => None,
        }
    }
}

/// Primer valor no vacío de un tipo dado.
pub fn first_of_kind(identifiers: &[TypedIdentifier], kind: IdentifierKind) -> Option<&str> {
    identifiers.iter()
               .find(|i| i.kind == kind && !i.value.is_empty())
               .map(|i| i.value.as_str())
}

pub fn resolve(identifiers: &[TypedIdentifier], preferred: IdentifierKind, fallback: &str) -> Resolution {
    if let Some(value) = first_of_kind(identifiers, preferred) {
        return Resolution { value: value.to_string(),
                            tier: ResolutionTier::Exact(preferred) };
    }
    if preferred == IdentifierKind::Name && first_of_kind(identifiers, IdentifierKind::Structure).is_some() {
        return Resolution { value: GENERIC_PRODUCT_LABEL.to_string(),
                            tier: ResolutionTier::GenericLabel };
    }
    Resolution { value: fallback.to_string(),
                 tier: ResolutionTier::Default }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_STRUCTURE;

    #[test]
    fn test_first_preferred_wins() {
        let ids = vec![TypedIdentifier::structure("CCO"),
                       TypedIdentifier::name("Ethanol"),
                       TypedIdentifier::name("Alcohol")];
        let r = resolve(&ids, IdentifierKind::Name, "Unknown Molecule 1");
        assert_eq!(r.value, "Ethanol");
        assert_eq!(r.tier, ResolutionTier::Exact(IdentifierKind::Name));
        assert!(r.is_exact());
    }

    #[test]
    fn test_name_falls_back_to_generic_label_when_structure_present() {
        let ids = vec![TypedIdentifier::new(IdentifierKind::Other, "64-17-5"), TypedIdentifier::structure("CCO")];
        let r = resolve(&ids, IdentifierKind::Name, "Unknown Molecule 4");
        assert_eq!(r.value, "Chemical Product");
        assert_eq!(r.tier, ResolutionTier::GenericLabel);
        assert_eq!(r.matched_kind(), Some(IdentifierKind::Structure));
    }

    #[test]
    fn test_name_default_when_nothing_usable() {
        let ids = vec![TypedIdentifier::new(IdentifierKind::Other, "64-17-5")];
        let r = resolve(&ids, IdentifierKind::Name, "Unknown Molecule 4");
        assert_eq!(r.value, "Unknown Molecule 4");
        assert_eq!(r.tier, ResolutionTier::Default);
        assert_eq!(r.matched_kind(), None);
    }

    #[test]
    fn test_structure_never_uses_generic_label() {
        let ids = vec![TypedIdentifier::name("Phenol")];
        let r = resolve(&ids, IdentifierKind::Structure, DEFAULT_STRUCTURE);
        assert_eq!(r.value, "C");
        assert_eq!(r.tier, ResolutionTier::Default);
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let ids = vec![TypedIdentifier::structure(""), TypedIdentifier::structure("c1ccccc1")];
        assert_eq!(resolve(&ids, IdentifierKind::Structure, DEFAULT_STRUCTURE).value, "c1ccccc1");
        assert_eq!(resolve(&[], IdentifierKind::Structure, DEFAULT_STRUCTURE).tier, ResolutionTier::Default);
    }
}

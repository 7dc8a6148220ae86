//! Fuente de elecciones para la generación sintética de pasos.
//!
//! La variante curada no trae datos químicos y sus pasos se fabrican con
//! elecciones pseudoaleatorias sobre vocabularios fijos. La fuente se inyecta
//! para que la salida sea reproducible (semilla) o exacta (guion en tests).
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait ChoiceSource {
    /// Entero en el rango cerrado `[low, high]`.
    fn pick_range(&mut self, low: usize, high: usize) -> usize;

    /// Elemento de un vocabulario no vacío.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
        where Self: Sized
    {
        let idx = self.pick_range(0, items.len().saturating_sub(1));
        &items[idx]
    }
}

/// Elecciones reproducibles a partir de una semilla.
pub struct SeededChoices {
    rng: StdRng,
}

impl SeededChoices {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl ChoiceSource for SeededChoices {
    fn pick_range(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Elecciones guionadas: cada valor es un desplazamiento sobre `low`
/// (recortado a `high`). Agotado el guion, devuelve siempre `low`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedChoices {
    script: VecDeque<usize>,
}

impl ScriptedChoices {
    pub fn new<I>(offsets: I) -> Self
        where I: IntoIterator<Item = usize>
    {
        Self { script: offsets.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn pick_range(&mut self, low: usize, high: usize) -> usize {
        let offset = self.script.pop_front().unwrap_or(0);
        low + offset.min(high.saturating_sub(low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible_and_bounded() {
        let mut a = SeededChoices::from_seed(7);
        let mut b = SeededChoices::from_seed(7);
        for _ in 0..200 {
            let x = a.pick_range(3, 8);
            assert_eq!(x, b.pick_range(3, 8));
            assert!((3..=8).contains(&x));
        }
    }

    #[test]
    fn test_scripted_offsets_are_clamped() {
        let mut s = ScriptedChoices::new([0, 2, 99]);
        assert_eq!(s.pick_range(1, 4), 1);
        assert_eq!(s.pick_range(1, 4), 3);
        assert_eq!(s.pick_range(1, 4), 4);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.pick_range(40, 99), 40);
    }

    #[test]
    fn test_pick_from_vocabulary() {
        let vocab = ["THF", "DCM", "EtOH"];
        let mut s = ScriptedChoices::new([2, 1]);
        assert_eq!(*s.pick(&vocab), "EtOH");
        assert_eq!(*s.pick(&vocab), "DCM");
    }
}

//! SignalScoreMap - per-signal frequency counts.

use serde::{Deserialize, Serialize};

use super::Signal;

/// Count of how often each signal was selected.
///
/// Every signal is always present; unseen signals read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SignalScoreMap {
    trust: u32,
    adoption: u32,
    efficiency: u32,
    context_awareness: u32,
    human_behavior: u32,
    systems_thinking: u32,
}

impl SignalScoreMap {
    /// Map with every count at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a map from explicit `(signal, count)` pairs; later pairs overwrite earlier ones.
    pub fn from_counts(counts: &[(Signal, u32)]) -> Self {
        let mut map = Self::zero();
        for (signal, count) in counts {
            *map.slot_mut(*signal) = *count;
        }
        map
    }

    /// Count for a single signal.
    pub fn get(&self, signal: Signal) -> u32 {
        match signal {
            Signal::Trust => self.trust,
            Signal::Adoption => self.adoption,
            Signal::Efficiency => self.efficiency,
            Signal::ContextAwareness => self.context_awareness,
            Signal::HumanBehavior => self.human_behavior,
            Signal::SystemsThinking => self.systems_thinking,
        }
    }

    /// Adds one occurrence of `signal`, saturating at `u32::MAX`.
    pub fn increment(&mut self, signal: Signal) {
        let slot = self.slot_mut(signal);
        *slot = slot.saturating_add(1);
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        Signal::all().iter().map(|s| u64::from(self.get(*s))).sum()
    }

    /// `(signal, count)` pairs in canonical signal order.
    pub fn iter(&self) -> impl Iterator<Item = (Signal, u32)> + '_ {
        Signal::all().iter().map(move |s| (*s, self.get(*s)))
    }

    fn slot_mut(&mut self, signal: Signal) -> &mut u32 {
        match signal {
            Signal::Trust => &mut self.trust,
            Signal::Adoption => &mut self.adoption,
            Signal::Efficiency => &mut self.efficiency,
            Signal::ContextAwareness => &mut self.context_awareness,
            Signal::HumanBehavior => &mut self.human_behavior,
            Signal::SystemsThinking => &mut self.systems_thinking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_map_has_all_signals_at_zero() {
        let map = SignalScoreMap::zero();
        assert_eq!(map.iter().count(), 6);
        assert!(map.iter().all(|(_, count)| count == 0));
        assert_eq!(map.total(), 0);
    }

    #[test]
    fn increment_touches_only_one_signal() {
        let mut map = SignalScoreMap::zero();
        map.increment(Signal::HumanBehavior);
        map.increment(Signal::HumanBehavior);

        assert_eq!(map.get(Signal::HumanBehavior), 2);
        assert_eq!(map.total(), 2);
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut map = SignalScoreMap::from_counts(&[(Signal::Trust, u32::MAX)]);
        map.increment(Signal::Trust);

        assert_eq!(map.get(Signal::Trust), u32::MAX);
    }

    #[test]
    fn total_of_max_counts_does_not_wrap() {
        let pairs: Vec<(Signal, u32)> = Signal::all().iter().map(|s| (*s, u32::MAX)).collect();
        let map = SignalScoreMap::from_counts(&pairs);

        assert_eq!(map.total(), 6 * u64::from(u32::MAX));
    }

    #[test]
    fn serializes_every_key_even_when_zero() {
        let map = SignalScoreMap::from_counts(&[(Signal::Trust, 3)]);
        let json = serde_json::to_value(map).unwrap();

        assert_eq!(json["Trust"], 3);
        assert_eq!(json["Adoption"], 0);
        assert_eq!(json["Efficiency"], 0);
        assert_eq!(json["ContextAwareness"], 0);
        assert_eq!(json["HumanBehavior"], 0);
        assert_eq!(json["SystemsThinking"], 0);
    }

    #[test]
    fn deserializes_partial_maps_with_zero_defaults() {
        let map: SignalScoreMap = serde_json::from_str(r#"{"Efficiency": 4}"#).unwrap();
        assert_eq!(map.get(Signal::Efficiency), 4);
        assert_eq!(map.get(Signal::Trust), 0);
    }
}

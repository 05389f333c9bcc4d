use serde::Serialize;

/// Horizontal placement a card must expose to take part in stacking.
pub trait AxisCard {
    /// Position along the axis, percent.
    fn position(&self) -> f64;
}

/// Tuning constants for the greedy level packer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StackConfig {
    /// Open interval of positions kept for layout. Wider than the drawable
    /// `[5, 95]` band so cards at the margins survive.
    pub keep_min: f64,
    pub keep_max: f64,
    /// Horizontal distance (percent) below which two same-level cards collide.
    pub min_distance: f64,
    /// Highest stacking tier; colliding cards are forced here when all tiers
    /// below are taken.
    pub max_level: u8,
    /// Axis clearance of level 0.
    pub base_offset: f64,
    /// Extra clearance per level.
    pub level_step: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            keep_min: -10.0,
            keep_max: 110.0,
            min_distance: 22.0,
            max_level: 4,
            base_offset: 40.0,
            level_step: 100.0,
        }
    }
}

/// A card with its collision-resolved vertical placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stacked<T> {
    #[serde(flatten)]
    pub item: T,
    /// Stacking tier, 0 = closest to the axis.
    pub level: u8,
    pub offset_y: f64,
    pub connector_height: f64,
}

/// Resolves vertical stacking for horizontally positioned cards.
///
/// Cards outside the keep band are dropped; the rest are swept left to right
/// (the sort is stable, so ties keep input order) and each card takes the
/// lowest level with no same-level neighbour closer than `min_distance`
/// among the cards already placed. Greedy and order dependent rather than
/// globally optimal: O(n * levels), deterministic for a given input.
pub fn stack_cards<T: AxisCard>(cards: Vec<T>, config: &StackConfig) -> Vec<Stacked<T>> {
    let mut kept: Vec<Stacked<T>> = cards
        .into_iter()
        .filter(|card| {
            let p = card.position();
            p > config.keep_min && p < config.keep_max
        })
        .map(|card| Stacked {
            item: card,
            level: 0,
            offset_y: 0.0,
            connector_height: 0.0,
        })
        .collect();

    kept.sort_by(|a, b| a.item.position().total_cmp(&b.item.position()));

    for i in 0..kept.len() {
        let pos = kept[i].item.position();
        let mut level: u8 = 0;
        loop {
            let collides = kept[..i].iter().any(|prev| {
                prev.level == level && (pos - prev.item.position()).abs() < config.min_distance
            });
            if !collides || level >= config.max_level {
                break;
            }
            level += 1;
        }

        let clearance = config.base_offset + f64::from(level) * config.level_step;
        kept[i].level = level;
        kept[i].offset_y = clearance;
        kept[i].connector_height = clearance;
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::{AxisCard, StackConfig, stack_cards};

    #[derive(Debug, Clone, PartialEq, serde::Serialize)]
    struct Card {
        name: &'static str,
        position: f64,
    }

    impl AxisCard for Card {
        fn position(&self) -> f64 {
            self.position
        }
    }

    fn cards(positions: &[(&'static str, f64)]) -> Vec<Card> {
        positions
            .iter()
            .map(|&(name, position)| Card { name, position })
            .collect()
    }

    #[test]
    fn close_neighbours_escalate_levels() {
        let stacked = stack_cards(
            cards(&[("a", 10.0), ("b", 15.0), ("c", 80.0)]),
            &StackConfig::default(),
        );

        assert_eq!(stacked.len(), 3);
        assert_eq!(stacked[0].item.name, "a");
        assert_eq!(stacked[0].level, 0);
        assert_eq!(stacked[1].item.name, "b");
        assert_eq!(stacked[1].level, 1);
        // Far enough from both: back to the axis level.
        assert_eq!(stacked[2].item.name, "c");
        assert_eq!(stacked[2].level, 0);
    }

    #[test]
    fn clearance_grows_by_level_step() {
        let stacked = stack_cards(cards(&[("a", 40.0), ("b", 41.0)]), &StackConfig::default());
        assert_eq!(stacked[0].offset_y, 40.0);
        assert_eq!(stacked[1].offset_y, 140.0);
        assert_eq!(stacked[1].connector_height, stacked[1].offset_y);
    }

    #[test]
    fn off_band_cards_never_surface() {
        let stacked = stack_cards(
            cards(&[("sentinel", -999.0), ("low", -10.0), ("high", 110.0), ("kept", 50.0)]),
            &StackConfig::default(),
        );
        assert_eq!(stacked.len(), 1);
        assert_eq!(stacked[0].item.name, "kept");
    }

    #[test]
    fn margin_cards_inside_tolerance_survive() {
        // The keep band is wider than the drawable [5, 95] band.
        let stacked = stack_cards(cards(&[("early", -9.5), ("late", 109.5)]), &StackConfig::default());
        assert_eq!(stacked.len(), 2);
    }

    #[test]
    fn level_search_caps_at_top_tier() {
        let coincident: Vec<(&'static str, f64)> =
            vec![("a", 50.0), ("b", 50.0), ("c", 50.0), ("d", 50.0), ("e", 50.0), ("f", 50.0)];
        let stacked = stack_cards(cards(&coincident), &StackConfig::default());
        let levels: Vec<u8> = stacked.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn ties_keep_input_order() {
        let stacked = stack_cards(cards(&[("first", 30.0), ("second", 30.0)]), &StackConfig::default());
        assert_eq!(stacked[0].item.name, "first");
        assert_eq!(stacked[1].item.name, "second");
    }

    #[test]
    fn stacking_is_deterministic() {
        let input = [("a", 12.0), ("b", 13.5), ("c", 34.0), ("d", 55.9), ("e", 56.0)];
        let once = stack_cards(cards(&input), &StackConfig::default());
        let twice = stack_cards(cards(&input), &StackConfig::default());
        assert_eq!(once, twice);
    }
}

//! Brushing-and-linking logic for the battle stats dashboard.
//!
//! This crate turns the immutable dataset plus the user's current selection
//! into the filtered, aggregated views each chart displays. Everything here
//! is a pure function of its inputs; the UI runtime owns the selection and
//! calls [`reconcile`] after every change.

pub mod aggregate;
pub mod event;
pub mod reconcile;
pub mod selection;

pub use aggregate::{aggregate, BarCount, Dimension};
pub use event::SelectionChange;
pub use reconcile::{reconcile, BarView, CrossFilter};
pub use selection::{Selection, StatRange};

#[cfg(test)]
pub(crate) mod testing {
    use pkmn_stats::{Dataset, Record, Tier};

    /// Build a record with every base stat set to `base`.
    pub fn record(primary_type: &str, tier: Tier, generation: u8, base: u16) -> Record {
        Record {
            primary_type: primary_type.to_string(),
            tier,
            generation,
            total: base * 6,
            hp: base,
            attack: base,
            defense: base,
            sp_atk: base,
            sp_def: base,
            speed: base,
        }
    }

    /// The three-row dataset used throughout the reconciliation tests.
    pub fn fire_water() -> Dataset {
        Dataset::from_records(vec![
            record("Fire", Tier::OU, 1, 80),
            record("Fire", Tier::UU, 2, 100),
            record("Water", Tier::OU, 1, 120),
        ])
    }
}

// Evidence mining core: literal keyword search, per-feature analysis,
// and cross-feature aggregation.

pub mod aggregate;
pub mod extract;
pub mod feature;

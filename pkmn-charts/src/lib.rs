//! Chart specifications for the battle stats dashboard.
//!
//! Builders in this crate shape reconciled views into plain serializable
//! structs. They hold no business logic; the D3.js renderer receives the
//! structs as JSON and draws them as-is.
//!
//! # Usage
//!
//! ```rust
//! use pkmn_filter::{reconcile, Dimension, Selection};
//! use pkmn_stats::Dataset;
//!
//! let dataset = Dataset::from_csv_str(
//!     "Type.1,Tier,Generation,Stat Total,HP,Attack,Defense,Sp.Atk,Sp.Def,Speed\n\
//!      Fire,OU,1,534,78,84,78,109,85,100\n",
//! )
//! .unwrap();
//! let selection = Selection::default().with_labels(Dimension::Type, ["Fire"]);
//! let views = reconcile(&dataset, &selection);
//! let spec = pkmn_charts::builders::dashboard(&views, &selection);
//! assert_eq!(spec.types.selected_points, vec![0]);
//! ```

pub mod builders;
pub mod models;

pub use builders::{bar_chart, dashboard, parallel_chart};
pub use models::{BarChartSpec, DashboardSpec, ParallelChartSpec};

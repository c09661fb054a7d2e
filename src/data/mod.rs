/// Data layer: core types, loading, normalization, filtering and display.
///
/// Architecture:
/// ```text
///  published sheet (CSV over HTTP) / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → rows keyed by original header
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  header → canonical key → Record
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  instructor emails, rows for the selected email
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ display   │  date-only / left-of-"--" → table cells
///   └──────────┘
/// ```

pub mod display;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;

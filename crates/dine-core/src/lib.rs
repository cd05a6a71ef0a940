//! `dine-core` — foundational types for the `dine` dining-philosophers
//! simulator.
//!
//! This crate is a dependency of every other `dine-*` crate.  It has no
//! `dine-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PhilosopherId`, `ForkId`                             |
//! | [`ring`]        | `Ring` — seat/fork adjacency and fork ordering        |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `TableConfig`, `TickOrder`                            |
//! | [`rng`]         | `SimRng` (seeded visiting-order permutations)         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod ring;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{TableConfig, TickOrder};
pub use error::{CoreError, CoreResult};
pub use ids::{ForkId, PhilosopherId};
pub use ring::Ring;
pub use rng::SimRng;
pub use time::Tick;

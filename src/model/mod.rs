//! # Transcript Model
//!
//! Plain data that crosses every boundary: table ↔ validator ↔ layout ↔
//! edges ↔ metrics ↔ rendering.
//!
//! Design rule: no I/O, no state, no rendering concerns here.

pub mod cell;
pub mod table;
pub mod proposition;
pub mod record;
pub mod node;
pub mod edge;

pub use cell::{Cell, UNKNOWN_MARKERS};
pub use table::{Column, Heading, Table, normalize_heading};
pub use proposition::PropositionId;
pub use record::{Dataset, LineType, Record, RelationType};
pub use node::{Node, Position};
pub use edge::Edge;

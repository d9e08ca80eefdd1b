//! Depth-ladder market making.
//!
//! Re-quotes a ladder of resting orders around an external reference price:
//! each cycle cancels everything, then places geometrically offset ask and
//! bid levels with sizes growing per level. One failed order never stops the
//! cycle; the book self-heals on the next pass.

pub mod error;
pub mod ladder;
pub mod requote;

pub use error::{QuoterError, QuoterResult};
pub use ladder::{build_ladder, Ladder, LadderConfig, LadderLevel};
pub use requote::{CycleReport, QuoterConfig, Requoter};

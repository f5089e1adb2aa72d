//! Analysis components: ATS compatibility, skills depth, experience
//! quality, role readiness, role recommendation, and report synthesis.
//!
//! Every component is a pure, synchronous function of its inputs. The
//! pipeline order is Extract → (ATS ∥ Depth ∥ Experience) → Readiness →
//! Synthesize; the scoring stages share only read-only inputs and may run
//! in any order.

pub mod ats;
pub mod experience;
pub mod readiness;
pub mod recommend;
pub mod report;
pub mod skills;

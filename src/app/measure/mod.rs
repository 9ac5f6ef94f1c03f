//! Mess-Session: Vertex-Sequenz, Distanzen, Segment-Labels und Tooltip-Texte.
//!
//! Komposition statt Vererbung: die Handler steuern die Session explizit über
//! Lifecycle- und Vertex-Events an; es gibt keinen globalen Zeichen-Handler.

mod labeler;
mod session;
mod tooltip;

pub use labeler::{SegmentLabel, SegmentLabeler};
pub use session::{MeasureSession, SessionPhase};
pub use tooltip::{tooltip_text, TooltipText};

#[cfg(test)]
mod tests;

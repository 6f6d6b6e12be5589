//! Interactive core of the Breathing Rivers site: the quiz engine, the
//! campaign carousel, the before/after comparison slider, the activity
//! footprint calculator, and the greenery heuristic behind the tree-planting
//! page. Pages construct these components with fixed [`catalog`] content and
//! render the view snapshots they publish; there is no server and no
//! persistence, so everything is session-scoped and lost on reload.

pub mod catalog;
pub mod nav;

pub use catalog::Catalog;
pub use engine::{carousel, footprint, quiz, slider};
pub use model::{activity::Activity, campaign::Campaign, question::Question};
pub use vision::{camera, greenery};

//! Presentation Layer
//!
//! Wire DTOs, the route guard and the route table.

pub mod dto;
pub mod guard;
pub mod router;

pub use guard::{GuardConfig, GuardDecision, Interstitial, InterstitialAction, RouteGuard};
pub use router::{Access, Navigation, RouteTable};

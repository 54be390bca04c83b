//! Exchange-agnostic domain types.

mod event_group;
mod id;
mod market;
mod money;
mod opportunity;

pub use event_group::EventGroup;
pub use id::{EventKey, MarketId};
pub use market::{Market, OutcomePrices, PriceValue};
pub use money::{Price, Volume, NEUTRAL_PRICE};
pub use opportunity::{Opportunity, OpportunityBuildError, OpportunityBuilder, OpportunityKind};

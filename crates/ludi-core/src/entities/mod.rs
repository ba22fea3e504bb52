//! Normalized entity structs for site content.
//!
//! Every struct is rebuilt from the content API on each fetch; nothing here is
//! persisted or mutated after construction. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` and use camelCase field names on the wire.

mod facilitator;
mod game;
mod media;
mod schedule;
mod testimonial;

pub use facilitator::{Facilitator, SocialLink};
pub use game::{Feature, Game, Review};
pub use media::Image;
pub use schedule::ScheduleEntry;
pub use testimonial::Testimonial;

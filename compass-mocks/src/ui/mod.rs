//! Small controls used by the mock pages

mod checkbox;
mod link_card;

pub use checkbox::Checkbox;
pub use link_card::LinkCard;

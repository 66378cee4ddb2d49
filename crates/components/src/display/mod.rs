mod card;
mod empty_state;
mod icon;
mod text_clamp;

pub use card::Card;
pub use empty_state::EmptyState;
pub use icon::icon;
pub use text_clamp::TextClamp;

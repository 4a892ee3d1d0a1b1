//! UI primitives (Button, Card, Banner, TextInput)

pub mod button;
pub mod card;
pub mod input;

pub use button::*;
pub use card::*;
pub use input::*;

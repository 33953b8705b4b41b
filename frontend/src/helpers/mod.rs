pub mod element;
pub mod events;
pub mod input;
pub mod prelude;
pub mod webpage;

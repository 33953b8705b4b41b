pub use super::element::Element;
pub use super::events::Events;
pub use super::input::Input;
pub use super::webpage::WebPage;

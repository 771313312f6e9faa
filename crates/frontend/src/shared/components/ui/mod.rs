pub mod button;
pub mod input;
pub mod message;
pub mod radio;
pub mod select;

pub use button::Button;
pub use input::Input;
pub use message::StatusMessage;
pub use radio::RadioGroup;
pub use select::Select;

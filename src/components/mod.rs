mod clear_button;

pub use clear_button::ClearButton;

mod central_panel;
mod controls;

pub use central_panel::central_panel;
pub use controls::controls;

mod alert;
mod fence;

pub use alert::WidgetAlert;
pub use fence::WidgetFence;

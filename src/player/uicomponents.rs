pub use controlsbar::{ControlsBar, ControlsStatus};
pub use stage::Stage;

mod controlsbar;
mod stage;

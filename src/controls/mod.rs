pub use hover::*;
pub use menu::*;
pub use nav::*;

mod hover;
mod menu;
mod nav;

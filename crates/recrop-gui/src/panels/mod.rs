pub mod editor;
pub mod preview;
pub mod toolbar;

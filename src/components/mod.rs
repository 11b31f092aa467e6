pub mod app;
pub mod draggable_photo;
pub mod edit_view;
pub mod start_screen;
pub mod zoom_slider;

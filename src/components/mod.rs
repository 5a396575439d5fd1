pub mod app;
pub mod drag_carousel;
pub mod item_card;
pub mod section_view;

pub mod header;
pub mod search_box;
pub mod category_buttons;
pub mod photo_gallery;
pub mod photo_modal;

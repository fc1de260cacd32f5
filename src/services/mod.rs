pub mod category_service;
pub mod product_service;
pub mod wishlist_service;

pub mod categories;
pub mod products;
pub mod wishlist_items;
pub mod wishlists;

pub use categories::Entity as Categories;
pub use products::Entity as Products;
pub use wishlist_items::Entity as WishlistItems;
pub use wishlists::Entity as Wishlists;

use sea_orm::entity::prelude::*;

/// `user_id` references an external identity, not a local users table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlist_items::Entity")]
    WishlistItems,
}

impl Related<super::wishlist_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistItems.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::wishlist_items::Relation::Products.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::wishlist_items::Relation::Wishlists.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

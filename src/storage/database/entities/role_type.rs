use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference table mapping role names to role ids
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Human-readable role name (unique)
    #[sea_orm(unique)]
    pub role_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invitation::Entity")]
    Invitation,
}

impl Related<super::invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

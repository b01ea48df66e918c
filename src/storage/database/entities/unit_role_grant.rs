use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role granted to a user at unit level by an invitation
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "unit_role_grants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Invitation that produced the grant (unique, one grant per invitation)
    #[sea_orm(unique)]
    pub invitation_id: String,

    pub unit_id: i64,

    pub user_id: i64,

    pub role_type_id: i32,

    pub is_occupant: bool,

    pub environment_code: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Access to a single case granted by an invitation
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "case_access_grants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub invitation_id: String,

    pub case_id: i64,

    pub unit_id: i64,

    pub user_id: i64,

    pub role_type_id: i32,

    pub environment_code: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

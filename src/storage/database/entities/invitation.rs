use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invitation record, one row per upstream invitation id
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invitations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Upstream invitation id (unique)
    #[sea_orm(unique)]
    pub invitation_id: String,

    /// Inviter user id
    pub invited_by: i64,

    /// Invitee user id
    pub invitee: i64,

    /// Resolved role
    pub role_type_id: i32,

    pub is_occupant: bool,

    /// Case the invitation is scoped to, if any
    pub case_id: Option<i64>,

    pub unit_id: i64,

    /// Free-form invitation classification
    pub invitation_type: String,

    /// Note shown to the invitee
    pub annotation: String,

    /// Registration timestamp
    pub created_at: DateTimeUtc,

    /// Set once every required side effect has landed
    pub processed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role_type::Entity",
        from = "Column::RoleTypeId",
        to = "super::role_type::Column::Id"
    )]
    RoleType,
}

impl Related<super::role_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for the vpn_servers table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vpn_servers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub host_name: String,
    pub ip: String,
    pub score: i32,
    pub ping: i32,
    pub speed: i64,
    pub country_id: i32,
    pub num_vpn_sessions: i32,
    pub uptime: i64,
    pub total_users: i32,
    pub total_traffic: i64,
    pub log_type: String,
    pub operator: String,
    pub message: String,
    #[sea_orm(column_type = "Text")]
    pub open_vpn_config: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id"
    )]
    Country,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

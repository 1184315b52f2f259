//! Creates the countries and vpn_servers tables.

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_create_directory"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Countries::Name).string().not_null())
                    .col(
                        ColumnDef::new(Countries::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Countries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Countries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Countries::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VpnServers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VpnServers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VpnServers::HostName).string().not_null())
                    .col(ColumnDef::new(VpnServers::Ip).string().not_null())
                    .col(ColumnDef::new(VpnServers::Score).integer().not_null())
                    .col(ColumnDef::new(VpnServers::Ping).integer().not_null())
                    .col(ColumnDef::new(VpnServers::Speed).big_integer().not_null())
                    .col(ColumnDef::new(VpnServers::CountryId).integer().not_null())
                    .col(
                        ColumnDef::new(VpnServers::NumVpnSessions)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VpnServers::Uptime).big_integer().not_null())
                    .col(ColumnDef::new(VpnServers::TotalUsers).integer().not_null())
                    .col(
                        ColumnDef::new(VpnServers::TotalTraffic)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VpnServers::LogType).string().not_null())
                    .col(ColumnDef::new(VpnServers::Operator).string().not_null())
                    .col(ColumnDef::new(VpnServers::Message).string().not_null())
                    .col(ColumnDef::new(VpnServers::OpenVpnConfig).text().not_null())
                    .col(
                        ColumnDef::new(VpnServers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VpnServers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VpnServers::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vpn_servers_country_id")
                            .from(VpnServers::Table, VpnServers::CountryId)
                            .to(Countries::Table, Countries::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the per-country listing
        manager
            .create_index(
                Index::create()
                    .table(VpnServers::Table)
                    .col(VpnServers::CountryId)
                    .name("idx_vpn_servers_country_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VpnServers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Countries {
    Table,
    Id,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum VpnServers {
    Table,
    Id,
    HostName,
    Ip,
    Score,
    Ping,
    Speed,
    CountryId,
    NumVpnSessions,
    Uptime,
    TotalUsers,
    TotalTraffic,
    LogType,
    Operator,
    Message,
    OpenVpnConfig,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

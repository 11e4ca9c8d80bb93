//! Create `service_orders` table.
//! One row per vehicle service job; enums are stored by their upper-case name.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceOrders::Table)
                    .if_not_exists()
                    .col(big_integer(ServiceOrders::Id).primary_key().auto_increment())
                    .col(string(ServiceOrders::ClientName).not_null())
                    .col(string(ServiceOrders::PhoneNumber).not_null())
                    .col(string(ServiceOrders::CarModel).not_null())
                    .col(string(ServiceOrders::ServiceType).not_null())
                    .col(double(ServiceOrders::ServiceValue).not_null())
                    .col(
                        ColumnDef::new(ServiceOrders::Status)
                            .string_len(32)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(ServiceOrders::PaymentMethod)
                            .string_len(32)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ServiceOrders::MessageWasSent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceOrders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceOrders {
    Table,
    Id,
    ClientName,
    PhoneNumber,
    CarModel,
    ServiceType,
    ServiceValue,
    Status,
    PaymentMethod,
    MessageWasSent,
}

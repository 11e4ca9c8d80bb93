//! Secondary indexes for the dashboard filters (status, payment method).
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_service_orders_status")
                    .table(ServiceOrders::Table)
                    .col(ServiceOrders::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_orders_payment_method")
                    .table(ServiceOrders::Table)
                    .col(ServiceOrders::PaymentMethod)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_orders_payment_method").table(ServiceOrders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_orders_status").table(ServiceOrders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceOrders { Table, Status, PaymentMethod }

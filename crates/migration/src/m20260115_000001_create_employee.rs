use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Birthdate,
    EmploymentDate,
    ManagerId,
    HomeAddress,
    CurrentSalary,
    Role,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Employee::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Employee::Birthdate).date().not_null())
                    .col(ColumnDef::new(Employee::EmploymentDate).date().not_null())
                    .col(ColumnDef::new(Employee::ManagerId).integer())
                    .col(ColumnDef::new(Employee::HomeAddress).string().not_null())
                    .col(ColumnDef::new(Employee::CurrentSalary).double().not_null())
                    .col(ColumnDef::new(Employee::Role).small_integer().not_null())
                    .foreign_key(
                        // Deleting a referenced manager must fail, never cascade.
                        ForeignKey::create()
                            .name("fk_employee_manager")
                            .from(Employee::Table, Employee::ManagerId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_manager_id")
                    .table(Employee::Table)
                    .col(Employee::ManagerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_role")
                    .table(Employee::Table)
                    .col(Employee::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

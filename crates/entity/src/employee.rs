use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single roster record. `manager_id` is a back-reference to the record of
/// the employee's reporting manager; it never implies ownership, and the
/// foreign key restricts deletion of a referenced manager.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "employee")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Date,
    pub employment_date: Date,
    #[sea_orm(indexed)]
    pub manager_id: Option<i32>,
    pub home_address: String,
    pub current_salary: f64,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ManagerId",
        to = "Column::Id",
        on_delete = "Restrict"
    )]
    Manager,
}

/// Stored as a small integer; the same codes travel on the wire
/// (`0 = CEO, 1 = Manager, 2 = Employee`).
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(try_from = "i16", into = "i16")]
pub enum Role {
    #[sea_orm(num_value = 0)]
    Ceo,
    #[sea_orm(num_value = 1)]
    Manager,
    #[sea_orm(num_value = 2)]
    Employee,
}

impl From<Role> for i16 {
    fn from(role: Role) -> Self {
        match role {
            Role::Ceo => 0,
            Role::Manager => 1,
            Role::Employee => 2,
        }
    }
}

impl TryFrom<i16> for Role {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Role::Ceo),
            1 => Ok(Role::Manager),
            2 => Ok(Role::Employee),
            other => Err(format!("unknown role code {}", other)),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

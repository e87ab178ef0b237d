//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}

impl ActiveModel {
    /// Active model for inserting a new row (id left to the database)
    pub fn for_insert(employee: Employee) -> Self {
        Self {
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            email: Set(employee.email),
            ..Default::default()
        }
    }

    /// Active model overwriting every column of an existing row
    pub fn for_update(employee: Employee) -> Self {
        Self {
            id: Set(employee.id),
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            email: Set(employee.email),
        }
    }
}

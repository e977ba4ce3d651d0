//! Pure transformations between the write model and the persisted entity.
//! Neither function validates anything; callers run the validation engine
//! first.

use entity::employee;
use sea_orm::{ActiveValue::Set, IntoActiveModel};

use crate::dto::EmployeeInput;

/// Fresh unsaved record with no id; the store assigns one on insert.
pub fn to_entity(input: &EmployeeInput) -> employee::ActiveModel {
    employee::ActiveModel {
        first_name: Set(input.first_name.clone()),
        last_name: Set(input.last_name.clone()),
        birthdate: Set(input.birthdate),
        employment_date: Set(input.employment_date),
        manager_id: Set(input.manager_id),
        home_address: Set(input.home_address.clone()),
        current_salary: Set(input.current_salary),
        role: Set(input.role),
        ..Default::default()
    }
}

/// Overwrites every mutable field of an existing record, unconditionally.
/// The id stays untouched.
pub fn apply_update(model: employee::Model, input: &EmployeeInput) -> employee::ActiveModel {
    let mut active = model.into_active_model();
    active.first_name = Set(input.first_name.clone());
    active.last_name = Set(input.last_name.clone());
    active.birthdate = Set(input.birthdate);
    active.employment_date = Set(input.employment_date);
    active.manager_id = Set(input.manager_id);
    active.home_address = Set(input.home_address.clone());
    active.current_salary = Set(input.current_salary);
    active.role = Set(input.role);
    active
}

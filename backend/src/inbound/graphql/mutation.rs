//! Write-side resolvers.
//!
//! Inputs are validated into domain values before any port is called, so a
//! malformed request never reaches the store.

use async_graphql::{Context, ID, Object};

use super::GraphqlState;
use super::error::{GqlResult, to_gql};
use super::types::{EmployeeInput, EmployeeObject, UserInput, UserObject};
use super::validation::{details_from_input, employee_id_from_arg, registration_from_input};

/// Root `Mutation` type.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register an account. The response never includes the password hash.
    async fn create_user(&self, ctx: &Context<'_>, user_input: UserInput) -> GqlResult<UserObject> {
        let state = ctx.data::<GraphqlState>()?;
        let registration = to_gql(registration_from_input(&user_input))?;
        let user = to_gql(state.accounts.register(registration).await)?;
        Ok(user.into())
    }

    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        employee_input: EmployeeInput,
    ) -> GqlResult<EmployeeObject> {
        let state = ctx.data::<GraphqlState>()?;
        let details = to_gql(details_from_input(&employee_input))?;
        let employee = to_gql(state.employees.create_employee(details).await)?;
        Ok(employee.into())
    }

    /// Remove a record and return it as it was before deletion.
    async fn delete_employee(&self, ctx: &Context<'_>, id: ID) -> GqlResult<EmployeeObject> {
        let state = ctx.data::<GraphqlState>()?;
        let id = to_gql(employee_id_from_arg(&id))?;
        let employee = to_gql(state.employees.delete_employee(&id).await)?;
        Ok(employee.into())
    }

    /// Overwrite all five mutable fields of a record.
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        employee_input: EmployeeInput,
    ) -> GqlResult<EmployeeObject> {
        let state = ctx.data::<GraphqlState>()?;
        let id = to_gql(employee_id_from_arg(&id))?;
        let details = to_gql(details_from_input(&employee_input))?;
        let employee = to_gql(state.employees.update_employee(&id, details).await)?;
        Ok(employee.into())
    }
}

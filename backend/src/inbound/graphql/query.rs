//! Read-side resolvers.

use async_graphql::{Context, ID, Object};

use super::GraphqlState;
use super::error::{GqlResult, to_gql};
use super::types::{AuthData, EmployeeObject, UserObject};
use super::validation::{credentials_from_args, employee_id_from_arg};

/// Root `Query` type.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every registered user, in store order.
    async fn users(&self, ctx: &Context<'_>) -> GqlResult<Vec<UserObject>> {
        let state = ctx.data::<GraphqlState>()?;
        let users = to_gql(state.accounts.list_users().await)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// Every employee record, in store order.
    async fn employees(&self, ctx: &Context<'_>) -> GqlResult<Vec<EmployeeObject>> {
        let state = ctx.data::<GraphqlState>()?;
        let employees = to_gql(state.employees.list_employees().await)?;
        Ok(employees.into_iter().map(EmployeeObject::from).collect())
    }

    /// Exchange credentials for a signed access token.
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> GqlResult<AuthData> {
        let state = ctx.data::<GraphqlState>()?;
        let credentials = to_gql(credentials_from_args(&email, &password))?;
        let token = to_gql(state.accounts.login(credentials).await)?;
        Ok(token.into())
    }

    async fn find_employee(&self, ctx: &Context<'_>, id: ID) -> GqlResult<EmployeeObject> {
        let state = ctx.data::<GraphqlState>()?;
        let id = to_gql(employee_id_from_arg(&id))?;
        let employee = to_gql(state.employees.find_employee(&id).await)?;
        Ok(employee.into())
    }
}

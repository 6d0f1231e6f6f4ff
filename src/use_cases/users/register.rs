use db_adapters::{
    user_adapter::{CreateUserParams, UserAdapter, UserMutation},
    CustomDbErr,
};
use sea_orm::ConnectionTrait;

use crate::{
    error_500,
    users::types::{UserRegisterRequest, UserVisible},
    UseCaseError,
};

pub async fn register_user<'a, C: ConnectionTrait>(
    params: UserRegisterRequest,
    hashed_password: String,
    user_adapter: UserAdapter<'a, C>,
) -> Result<UserVisible, UseCaseError> {
    validate(&params)?;

    user_adapter
        .create(CreateUserParams {
            email: params.email.trim().to_lowercase(),
            password: hashed_password,
            name: params.name.trim().to_string(),
        })
        .await
        .map(UserVisible::from)
        .map_err(|e| match CustomDbErr::from(&e) {
            CustomDbErr::Duplicate => {
                UseCaseError::Conflict("A user with this email already exists.".to_string())
            }
            _ => error_500(e),
        })
}

fn validate(params: &UserRegisterRequest) -> Result<(), UseCaseError> {
    let email = params.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(UseCaseError::BadRequest(
            "A valid email address is required.".to_string(),
        ));
    }
    if params.password.is_empty() {
        return Err(UseCaseError::BadRequest("Password is required.".to_string()));
    }
    if params.name.trim().is_empty() {
        return Err(UseCaseError::BadRequest("Name is required.".to_string()));
    }
    Ok(())
}

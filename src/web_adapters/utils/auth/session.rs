use actix_session::{Session, SessionInsertError};

use crate::users::types::{USER_EMAIL_KEY, USER_ID_KEY};

pub fn get_user_id(session: &Session) -> Result<uuid::Uuid, String> {
    match session.get(USER_ID_KEY) {
        Ok(user_id) => match user_id {
            None => Err("You are not authenticated".to_string()),
            Some(id) => Ok(id),
        },
        Err(e) => Err(e.to_string()),
    }
}

pub fn renew_session(
    session: &Session,
    id: uuid::Uuid,
    email: String,
) -> Result<(), SessionInsertError> {
    session.renew();
    session.insert(USER_ID_KEY, id)?;
    session.insert(USER_EMAIL_KEY, email)?;
    Ok(())
}

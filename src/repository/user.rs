use diesel::prelude::*;

use crate::{
    domain::{
        types::Username,
        user::{NewUser, User},
    },
    models::user::{NewUser as DbNewUser, User as DbUser},
    repository::{DieselRepository, UserReader, UserWriter, errors::RepositoryResult},
    schema::users,
};

impl UserReader for DieselRepository {
    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        let mut conn = self.pool().get()?;
        let user = users::table
            .filter(users::username.eq(username.as_str()))
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()?;

        match user {
            Some(user) => Ok(Some(User::try_from(user)?)),
            None => Ok(None),
        }
    }

    fn username_exists(&self, username: &Username) -> RepositoryResult<bool> {
        let mut conn = self.pool().get()?;
        let exists = diesel::select(diesel::dsl::exists(
            users::table.filter(users::username.eq(username.as_str())),
        ))
        .get_result::<bool>(&mut conn)?;
        Ok(exists)
    }

    fn count_users(&self) -> RepositoryResult<usize> {
        let mut conn = self.pool().get()?;
        let total: i64 = users::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        let mut conn = self.pool().get()?;
        let insertable: DbNewUser = new_user.into();

        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .returning(DbUser::as_returning())
            .get_result::<DbUser>(&mut conn)?;

        Ok(User::try_from(created)?)
    }
}

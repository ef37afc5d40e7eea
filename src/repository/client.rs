use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, NewClient},
        types::ClientId,
    },
    models::client::{Client as DbClient, NewClient as DbNewClient},
    repository::{ClientReader, ClientWriter, DieselRepository, errors::RepositoryResult},
    schema::clients,
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.pool().get()?;
        let client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        match client {
            Some(client) => Ok(Some(Client::try_from(client)?)),
            None => Ok(None),
        }
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        let mut conn = self.pool().get()?;
        let items = clients::table
            .order((clients::name.asc(), clients::id.asc()))
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        let clients = items
            .into_iter()
            .map(Client::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(clients)
    }
}

impl ClientWriter for DieselRepository {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize> {
        let mut conn = self.pool().get()?;
        let insertables: Vec<DbNewClient> = new_clients.iter().map(Into::into).collect();
        let affected = diesel::insert_into(clients::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}

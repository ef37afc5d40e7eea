//! Services backing the client list and the client detail modal.

use crate::domain::types::ClientId;
use crate::dto::client_list::{ClientListData, ClientRow};
use crate::dto::client_view::{ClientView, build_client_view};
use crate::repository::ClientReader;
use crate::services::ServiceResult;

/// Loads every client for the index page.
pub fn list_clients<R>(repo: &R) -> ServiceResult<ClientListData>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients()?;

    Ok(ClientListData {
        clients: clients.iter().map(ClientRow::from).collect(),
    })
}

/// Fetches a client and projects it for the modal.
///
/// Unknown and non-positive ids produce `None`, which renders as no output.
pub fn load_client_view<R>(
    repo: &R,
    client_id: i32,
    visible: bool,
) -> ServiceResult<Option<ClientView>>
where
    R: ClientReader + ?Sized,
{
    let Ok(client_id) = ClientId::new(client_id) else {
        return Ok(None);
    };

    let client = repo.get_client_by_id(client_id)?;

    Ok(build_client_view(client.as_ref(), visible))
}

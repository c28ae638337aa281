//! # Mock Registry
//!
//! Test utilities for exercising client logic without spawning a
//! [`RegistryActor`](crate::registry::RegistryActor).
//!
//! [`create_mock_client`] hands back a [`RegistryClient`] wired to a channel
//! the test controls. The test then plays the registry's side: receive the
//! request with an `expect_*` helper, assert on the payload, and answer
//! through the captured responder. This keeps client tests fast and fully
//! deterministic, and makes failure injection (a closed channel, a
//! `NotImplemented` answer) trivial compared to steering a live actor into
//! the same state.

use crate::model::{Person, PersonCreate, PersonId, Statistics};
use crate::registry::client::RegistryClient;
use crate::registry::error::RegistryError;
use crate::registry::message::RegistryRequest;
use tokio::sync::{mpsc, oneshot};

/// Creates a client and the receiver for asserting the requests it sends.
pub fn create_mock_client(
    buffer_size: usize,
) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Receives the next message, which must be an Add request.
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(
    PersonCreate,
    oneshot::Sender<Result<PersonId, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Add { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next message, which must be a Get request.
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(
    PersonId,
    oneshot::Sender<Result<Option<Person>, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next message, which must be a List request.
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<oneshot::Sender<Result<Vec<(PersonId, Person)>, RegistryError>>> {
    match receiver.recv().await {
        Some(RegistryRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Receives the next message, which must be a Remove request.
pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(PersonId, oneshot::Sender<Result<(), RegistryError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next message, which must be a Statistics request.
pub async fn expect_statistics(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<oneshot::Sender<Result<Statistics, RegistryError>>> {
    match receiver.recv().await {
        Some(RegistryRequest::Statistics { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, EmployeeCreate};

    #[tokio::test]
    async fn mock_answers_an_add_request() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let params = PersonCreate::Employee(EmployeeCreate {
                name: "Ana".to_string(),
                title: "Developer".to_string(),
                age: 30,
                monthly_salary: 3000.0,
            });
            client.add(params).await
        });

        let (params, responder) = expect_add(&mut receiver).await.expect("expected Add");
        match params {
            PersonCreate::Employee(p) => assert_eq!(p.name, "Ana"),
            _ => panic!("expected an employee payload"),
        }
        responder.send(Ok(PersonId(1))).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(PersonId(1)));
    }

    #[tokio::test]
    async fn mock_answers_a_get_request() {
        let (client, mut receiver) = create_mock_client(10);

        let get_task = tokio::spawn(async move { client.get(PersonId(7)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("expected Get");
        assert_eq!(id, PersonId(7));
        responder
            .send(Ok(Some(Person::Employee(Employee {
                name: "Ana".to_string(),
                age: 30,
                title: "Developer".to_string(),
                monthly_salary: 3000.0,
            }))))
            .unwrap();

        let person = get_task.await.unwrap().unwrap().unwrap();
        assert_eq!(person.name(), "Ana");
    }

    #[tokio::test]
    async fn dropped_responder_surfaces_as_registry_dropped() {
        let (client, mut receiver) = create_mock_client(10);

        let stats_task = tokio::spawn(async move { client.statistics().await });

        let responder = expect_statistics(&mut receiver)
            .await
            .expect("expected Statistics");
        drop(responder);

        assert_eq!(
            stats_task.await.unwrap(),
            Err(RegistryError::RegistryDropped)
        );
    }
}

//! Properties that hold for any call sequence on one connection.

use std::collections::HashSet;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use spanner_connection::Connection;
use spanner_core::TransactionState;
use spanner_testkit::RecordingClient;
use spanner_transaction::TransactionHandle;

fn connection() -> (Arc<RecordingClient>, Connection<RecordingClient>) {
    let client = Arc::new(RecordingClient::new());
    let connection = Connection::new(Arc::clone(&client));
    (client, connection)
}

#[tokio::test]
async fn test_any_run_of_begins_issues_one_start() {
    for run_length in 1..=8 {
        let (client, mut connection) = connection();

        for _ in 0..run_length {
            connection.begin_transaction().await.unwrap();
        }

        assert_eq!(client.start_count(), 1, "after {run_length} begins");
    }
}

#[tokio::test]
async fn test_each_finished_transaction_is_replaced() {
    // GIVEN
    let (client, mut connection) = connection();
    let mut seen = HashSet::new();

    // WHEN
    for round in 0..5 {
        connection.begin_transaction().await.unwrap();
        let id = connection.current_transaction().unwrap().id();
        assert!(seen.insert(id), "transaction {id} reused in round {round}");

        if round % 2 == 0 {
            connection.commit_transaction().await.unwrap();
        } else {
            connection.rollback_transaction().await.unwrap();
        }
    }

    // THEN
    assert_eq!(client.start_count(), 5);
    assert_eq!(client.commit_count(), 3);
    assert_eq!(client.rollback_count(), 2);
}

#[tokio::test]
async fn test_begin_commit_begin_issues_two_starts() {
    let (client, mut connection) = connection();

    connection.begin_transaction().await.unwrap();
    let first = connection.current_transaction().unwrap().id();
    connection.commit_transaction().await.unwrap();
    assert_eq!(connection.transaction_state(), Some(TransactionState::Committed));
    connection.begin_transaction().await.unwrap();

    assert_eq!(client.start_count(), 2);
    assert!(connection.current_transaction().unwrap().id() != first);
}

#[tokio::test]
async fn test_finish_on_fresh_connection_issues_nothing() {
    let (client, mut connection) = connection();

    for _ in 0..3 {
        connection.commit_transaction().await.unwrap();
        connection.rollback_transaction().await.unwrap();
    }

    assert_eq!(
        (client.start_count(), client.commit_count(), client.rollback_count()),
        (0, 0, 0)
    );
}

#[tokio::test]
async fn test_state_is_read_fresh_on_every_call() {
    // GIVEN a transaction the connection has already seen as started
    let (client, mut connection) = connection();
    connection.begin_transaction().await.unwrap();
    assert!(connection.is_in_transaction());

    // WHEN the server aborts it behind the connection's back
    client.last_transaction().unwrap().abort();

    // THEN the connection sees it without any call in between
    assert!(!connection.is_in_transaction());
    assert_eq!(connection.transaction_state(), Some(TransactionState::Aborted));
}

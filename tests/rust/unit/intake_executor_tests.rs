//! GraphIntake against a mocked graph store.

use async_trait::async_trait;
use graph_intake::config::IntakeConfig;
use graph_intake::diagnostics::CollectingSink;
use graph_intake::graph_model::{Node, Relationship};
use graph_intake::intake::{
    ExecutorError, GraphIntake, IntakeError, Parameters, QueryExecutor, ResultRow,
};
use log::Level;
use mockall::mock;
use mockall::predicate::{always, eq, function};
use serde_json::{json, Value};
use std::sync::Arc;

mock! {
    pub Executor {}

    #[async_trait]
    impl QueryExecutor for Executor {
        async fn execute(
            &self,
            statement: &str,
            parameters: &Parameters,
        ) -> Result<Vec<ResultRow>, ExecutorError>;
    }
}

fn row(value: Value) -> ResultRow {
    match value {
        Value::Object(map) => map,
        other => panic!("test row must be an object, got {}", other),
    }
}

#[tokio::test]
async fn test_create_nodes_executes_once_with_empty_parameters() {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .with(
            eq("MERGE(n0:Person { name: \"Alice\" })\nMERGE(n1:City { name: \"London\" })"),
            function(|parameters: &Parameters| parameters.is_empty()),
        )
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let intake = GraphIntake::new(executor, IntakeConfig::default());
    intake
        .create_nodes(&[
            Node::new(["Person"]).with_property("name", "Alice"),
            Node::new(["City"]).with_property("name", "London"),
        ])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_relationships_executes_composed_statement() {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .with(
            eq("MATCH (sn0:Person { name: \"Bob\" })\nOPTIONAL MATCH (tn0:Car { make: \"Toyota\" })\nCREATE (sn0)-[:OWNS { since: 2022 }]->(tn0)"),
            always(),
        )
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let intake = GraphIntake::new(executor, IntakeConfig::default());
    intake
        .create_relationships(&[Relationship::new(
            "OWNS",
            Node::new(["Person"]).with_property("name", "Bob"),
            Node::new(["Car"]).with_property("make", "Toyota"),
        )
        .with_property("since", 2022)])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_nodes_decodes_rows_and_skips_unbound_ones() {
    let rows = vec![
        row(json!({"n": {"name": "Alice", "age": 30}, "labels": ["Person", "Employee"]})),
        row(json!({"n": null, "labels": []})),
        row(json!({"n": {"name": "Bob"}, "labels": ["Person"]})),
    ];

    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .with(
            eq("MATCH (n)\nWHERE n:Person\nRETURN n, labels(n) as labels LIMIT 20"),
            always(),
        )
        .times(1)
        .returning(move |_, _| Ok(rows.clone()));

    let sink = Arc::new(CollectingSink::new());
    let intake = GraphIntake::new(executor, IntakeConfig::default()).with_sink(sink.clone());

    let nodes = intake.get_nodes(&Node::new(["Person"]), None).await.unwrap();

    assert_eq!(
        nodes,
        vec![
            Node::new(["Person", "Employee"])
                .with_property("name", "Alice")
                .with_property("age", 30),
            Node::new(["Person"]).with_property("name", "Bob"),
        ]
    );
    let errors = sink.at_level(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("no bound node"));
    assert!(sink
        .at_level(Level::Info)
        .iter()
        .any(|d| d.message == "decoded 2 of 3 rows into nodes"));
}

#[tokio::test]
async fn test_get_nodes_passes_caller_limit() {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .with(
            eq("MATCH (n { name: \"Alice\" })\nRETURN n, labels(n) as labels LIMIT 3"),
            always(),
        )
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let intake = GraphIntake::new(executor, IntakeConfig::default());
    let nodes = intake
        .get_nodes(&Node::default().with_property("name", "Alice"), Some(3))
        .await
        .unwrap();

    assert!(nodes.is_empty());
}

#[tokio::test]
async fn test_store_failure_is_surfaced() {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .times(1)
        .returning(|_, _| Err(ExecutorError::Statement("Invalid input 'X'".to_string())));

    let intake = GraphIntake::new(executor, IntakeConfig::default());
    let err = intake
        .create_nodes(&[Node::new(["Fish"])])
        .await
        .unwrap_err();

    match err {
        IntakeError::Execution(ExecutorError::Statement(message)) => {
            assert_eq!(message, "Invalid input 'X'")
        }
        other => panic!("expected execution error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generation_failure_skips_executor() {
    let mut executor = MockExecutor::new();
    executor.expect_execute().never();

    let intake = GraphIntake::new(executor, IntakeConfig::default());
    let err = intake
        .create_relationships(&[Relationship::new(
            "KNOWS",
            Node::new(["Person"]),
            Node::default(),
        )])
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::Generation(_)));
}

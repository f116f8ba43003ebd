//! Properties every generated statement must satisfy: determinism, variable
//! naming, and clause ordering across batches.

use graph_intake::cypher_query_generator::{
    generate_batch_create, generate_node_create, generate_node_match, generate_nodes_create,
    generate_nodes_read, generate_relationship_create, generate_relationships_create,
    CypherGeneratorError,
};
use graph_intake::graph_model::{CreateBatch, Node, Relationship};
use std::collections::HashSet;
use test_case::test_case;

fn person(name: &str) -> Node {
    Node::new(["Person"]).with_property("name", name)
}

fn city(name: &str) -> Node {
    Node::new(["City"]).with_property("name", name)
}

fn lives_in(who: &str, place: &str) -> Relationship {
    Relationship::new("LIVES_IN", person(who), city(place))
}

#[test_case(Node::default(), "MATCH (n)" ; "no labels or properties")]
#[test_case(Node::new(["Person", "Employee"]), "MATCH (n)\nWHERE n:Person OR n:Employee" ; "label union")]
#[test_case(Node::default().with_property("name", "Alice"), "MATCH (n { name: \"Alice\" })" ; "properties only")]
fn test_node_match_scenarios(node: Node, expected: &str) {
    assert_eq!(generate_node_match(&node).unwrap(), expected);
}

#[test]
fn test_create_node_scenario() {
    let node = Node::new(["Person"]).with_property("name", "John");
    assert_eq!(
        generate_node_create(&node, 0).unwrap(),
        "MERGE(n0:Person { name: \"John\" })"
    );
}

#[test]
fn test_two_node_batch_scenario() {
    let nodes = vec![person("Alice"), city("London")];
    assert_eq!(
        generate_nodes_create(&nodes).unwrap(),
        "MERGE(n0:Person { name: \"Alice\" })\nMERGE(n1:City { name: \"London\" })"
    );
}

#[test]
fn test_relationship_scenario() {
    let fragments = generate_relationship_create(&lives_in("Alice", "London"), 0).unwrap();
    assert_eq!(
        fragments.match_clause,
        "MATCH (sn0:Person { name: \"Alice\" })\nOPTIONAL MATCH (tn0:City { name: \"London\" })"
    );
    assert_eq!(fragments.create_clause, "\nCREATE (sn0)-[:LIVES_IN]->(tn0)");
}

#[test]
fn test_node_batch_indices_are_sequential_and_unique() {
    let nodes: Vec<Node> = (0..25).map(|i| person(&format!("p{}", i))).collect();
    let query = generate_nodes_create(&nodes).unwrap();
    let lines: Vec<&str> = query.lines().collect();

    assert_eq!(lines.len(), 25);
    let mut seen = HashSet::new();
    for (index, line) in lines.iter().enumerate() {
        let prefix = format!("MERGE(n{}:Person {{ name: \"p{}\" }})", index, index);
        assert_eq!(*line, prefix);
        assert!(seen.insert(format!("n{}", index)));
    }
}

#[test]
fn test_secondary_labels_follow_their_merge_in_order() {
    let node = Node::new(["A", "B", "C"]);
    let query = generate_node_create(&node, 2).unwrap();
    let lines: Vec<&str> = query.lines().collect();

    assert_eq!(lines, vec!["MERGE(n2:A)", "SET n2:B", "SET n2:C"]);
}

#[test]
fn test_relationship_batch_matches_precede_creates() {
    let relationships = vec![
        lives_in("Alice", "London"),
        lives_in("Bob", "Paris"),
        lives_in("Carol", "Oslo"),
    ];
    let query = generate_relationships_create(&relationships).unwrap();
    let lines: Vec<&str> = query.lines().collect();

    let first_create = lines.iter().position(|l| l.starts_with("CREATE")).unwrap();
    let last_match = lines.iter().rposition(|l| l.contains("MATCH")).unwrap();
    assert!(last_match < first_create);

    let creates: Vec<&str> = lines[first_create..].to_vec();
    assert_eq!(
        creates,
        vec![
            "CREATE (sn0)-[:LIVES_IN]->(tn0)",
            "CREATE (sn1)-[:LIVES_IN]->(tn1)",
            "CREATE (sn2)-[:LIVES_IN]->(tn2)",
        ]
    );
    assert_eq!(lines[2], "MATCH (sn1:Person { name: \"Bob\" })");
    assert_eq!(lines[3], "OPTIONAL MATCH (tn1:City { name: \"Paris\" })");
}

#[test]
fn test_two_relationship_batch_scenario() {
    let relationships = vec![
        lives_in("Alice", "London"),
        Relationship::new(
            "OWNS",
            person("Bob"),
            Node::new(["Car"]).with_property("make", "Toyota"),
        ),
    ];

    assert_eq!(
        generate_relationships_create(&relationships).unwrap(),
        "MATCH (sn0:Person { name: \"Alice\" })\n\
         OPTIONAL MATCH (tn0:City { name: \"London\" })\n\
         MATCH (sn1:Person { name: \"Bob\" })\n\
         OPTIONAL MATCH (tn1:Car { make: \"Toyota\" })\n\
         CREATE (sn0)-[:LIVES_IN]->(tn0)\n\
         CREATE (sn1)-[:OWNS]->(tn1)"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let nodes = CreateBatch::Nodes(vec![
        Node::new(["Person", "Employee"])
            .with_property("name", "Dana")
            .with_property("age", 38)
            .with_property("rating", 4.75),
        city("Lisbon"),
    ]);
    let relationships = CreateBatch::Relationships(vec![
        lives_in("Dana", "Lisbon").with_property("since", 2019),
        lives_in("Eve", "Rome"),
    ]);
    let pattern = Node::new(["Person", "Employee"]).with_property("age", 38);

    for batch in [&nodes, &relationships] {
        assert_eq!(
            generate_batch_create(batch).unwrap(),
            generate_batch_create(&batch.clone()).unwrap()
        );
    }
    assert_eq!(
        generate_nodes_read(&pattern, 10).unwrap(),
        generate_nodes_read(&pattern.clone(), 10).unwrap()
    );
}

#[test]
fn test_failed_batch_reports_entry_and_cause() {
    let relationships = vec![
        lives_in("Alice", "London"),
        Relationship::new("LIVES_IN", Node::default(), city("Paris")),
    ];

    match generate_relationships_create(&relationships) {
        Err(CypherGeneratorError::BatchEntry { index, source }) => {
            assert_eq!(index, 1);
            assert!(source.is_invalid_entity());
        }
        other => panic!("expected a batch entry error, got {:?}", other),
    }
}

#[test]
fn test_quote_in_value_fails_instead_of_emitting_broken_text() {
    let nodes = vec![person("Alice"), person("Robert \"Bobby\" Tables")];

    let err = generate_nodes_create(&nodes).unwrap_err();
    assert!(!err.is_invalid_entity());
    assert!(err.to_string().contains("Batch entry 1"));
}

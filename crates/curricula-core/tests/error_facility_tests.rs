use curricula_core::errors::{ExError, ExErrorKind, TreeError};
use curricula_core_types::RequestId;

#[test]
fn test_depth_exceeded_maps_to_stable_code() {
    let err = TreeError::DepthExceeded {
        node_id: "n6".to_string(),
        depth: 6,
        max_depth: 5,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DepthExceeded);
    assert_eq!(ex_err.code(), "ERR_DEPTH_EXCEEDED");
    assert_eq!(ex_err.node_id(), Some("n6"));
    assert_eq!(ex_err.depth(), Some(6));
    assert!(ex_err.message().contains("maximum depth is 5"));
}

#[test]
fn test_illegal_move_carries_operation() {
    let err = TreeError::IllegalMove {
        node_id: "ch-1".to_string(),
        new_parent_id: "l-1".to_string(),
        reason: "cycle".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.code(), "ERR_ILLEGAL_MOVE");
    assert_eq!(ex_err.op(), Some("move_node"));
    assert_eq!(ex_err.node_id(), Some("ch-1"));
}

#[test]
fn test_validation_findings_are_invariant_violations() {
    let findings = vec![
        TreeError::DepthMismatch {
            node_id: "a".to_string(),
            expected: 1,
            actual: 2,
        },
        TreeError::ChildCountMismatch {
            node_id: "a".to_string(),
            declared: 3,
            actual: 1,
        },
        TreeError::KindDepthMismatch {
            node_id: "a".to_string(),
            kind: "lesson".to_string(),
            depth: 1,
        },
    ];

    for finding in findings {
        let ex_err: ExError = finding.into();
        assert_eq!(ex_err.kind(), ExErrorKind::InvariantViolation);
        assert_eq!(ex_err.node_id(), Some("a"));
    }

    let dup: ExError = TreeError::DuplicateNodeId {
        node_id: "a".to_string(),
    }
    .into();
    assert_eq!(dup.code(), "ERR_DUPLICATE_ID");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidShape, "ERR_INVALID_SHAPE"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::DepthExceeded, "ERR_DEPTH_EXCEEDED"),
        (ExErrorKind::IllegalMove, "ERR_ILLEGAL_MOVE"),
        (ExErrorKind::DuplicateId, "ERR_DUPLICATE_ID"),
        (ExErrorKind::InvariantViolation, "ERR_INVARIANT_VIOLATION"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Configuration, "ERR_CONFIGURATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_request_id_rendered_in_display() {
    let request_id = RequestId::from_string("req-42".to_string());
    let err = ExError::new(ExErrorKind::Io)
        .with_op("stats")
        .with_message("cannot read file")
        .with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
    assert_eq!(
        err.to_string(),
        "[ERR_IO] in operation 'stats': cannot read file (request_id: req-42)"
    );
}

#[test]
fn test_serde_errors_become_serialization() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: TreeError = parse.unwrap_err().into();
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

//! Commit-ordering and failure-reporting tests using recording collections.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;

use sqlgen_model::{ForeignKey, SchemaDescription, TableDescription, TableName};
use sqlgen_session::{
    EntityCollection, FlushPhase, NoDependencies, Session, SessionError,
};

type FlushLog = Rc<RefCell<Vec<(String, FlushPhase)>>>;

/// Test double that records every flush into a shared log.
struct Recording {
    table: TableName,
    log: FlushLog,
    pending: bool,
    fail_in: Option<FlushPhase>,
}

impl Recording {
    fn boxed(name: &str, log: &FlushLog) -> Box<Self> {
        Box::new(Self {
            table: TableName::new(name).unwrap(),
            log: Rc::clone(log),
            pending: true,
            fail_in: None,
        })
    }

    fn failing(name: &str, log: &FlushLog, phase: FlushPhase) -> Box<Self> {
        let mut collection = Self::boxed(name, log);
        collection.fail_in = Some(phase);
        collection
    }

    fn idle(name: &str, log: &FlushLog) -> Box<Self> {
        let mut collection = Self::boxed(name, log);
        collection.pending = false;
        collection
    }
}

impl EntityCollection for Recording {
    fn table(&self) -> &TableName {
        &self.table
    }

    fn has_pending_work(&self) -> bool {
        self.pending
    }

    fn flush(&mut self, phase: FlushPhase) -> anyhow::Result<()> {
        if self.fail_in == Some(phase) {
            bail!("storage rejected the batch");
        }
        self.log.borrow_mut().push((self.table.to_string(), phase));
        if phase == FlushPhase::Deletes {
            self.pending = false;
        }
        Ok(())
    }
}

fn fk_schema(edges: &[(&str, &str)], tables: &[&str]) -> SchemaDescription {
    SchemaDescription {
        tables: tables
            .iter()
            .map(|name| TableDescription {
                name: TableName::new(*name).unwrap(),
                columns: Vec::new(),
                foreign_keys: edges
                    .iter()
                    .filter(|(child, _)| child == name)
                    .map(|(_, parent)| ForeignKey {
                        column: format!("{}_id", parent.to_lowercase()),
                        parent: TableName::new(*parent).unwrap(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn upserts(log: &FlushLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|(_, phase)| *phase == FlushPhase::Upserts)
        .map(|(table, _)| table.clone())
        .collect()
}

fn deletes(log: &FlushLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|(_, phase)| *phase == FlushPhase::Deletes)
        .map(|(table, _)| table.clone())
        .collect()
}

#[test]
fn commit_with_nothing_registered_is_a_noop() {
    let mut session = Session::new(NoDependencies);
    assert_eq!(session.registered_len(), 0);
    assert!(!session.has_pending_work());

    let summary = session.commit_all().unwrap();
    assert_eq!(summary.flushed, 0);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn parents_flush_before_children_despite_registration_order() {
    let log: FlushLog = Rc::default();
    let schema = fk_schema(&[("Order", "Customer")], &["Customer", "Order"]);

    let mut session = Session::new(schema);
    // child registered first on purpose
    session.register(Recording::boxed("Order", &log));
    session.register(Recording::boxed("Customer", &log));
    session.commit_all().unwrap();

    assert_eq!(upserts(&log), vec!["Customer", "Order"]);
}

#[test]
fn deletes_flush_children_before_parents() {
    let log: FlushLog = Rc::default();
    let schema = fk_schema(&[("Order", "Customer")], &["Customer", "Order"]);

    let mut session = Session::new(schema);
    session.register(Recording::boxed("Customer", &log));
    session.register(Recording::boxed("Order", &log));
    session.commit_all().unwrap();

    assert_eq!(deletes(&log), vec!["Order", "Customer"]);
}

#[test]
fn multi_level_hierarchy_flushes_top_down() {
    let log: FlushLog = Rc::default();
    let schema = fk_schema(
        &[("Order", "Customer"), ("OrderDetail", "Order")],
        &["Customer", "Order", "OrderDetail"],
    );

    let mut session = Session::new(schema);
    session.register(Recording::boxed("OrderDetail", &log));
    session.register(Recording::boxed("Order", &log));
    session.register(Recording::boxed("Customer", &log));
    session.commit_all().unwrap();

    assert_eq!(upserts(&log), vec!["Customer", "Order", "OrderDetail"]);
    assert_eq!(deletes(&log), vec!["OrderDetail", "Order", "Customer"]);
}

#[test]
fn first_failure_stops_the_commit_and_is_attributed() {
    let log: FlushLog = Rc::default();

    let mut session = Session::new(NoDependencies);
    session.register(Recording::boxed("A", &log));
    session.register(Recording::failing("B", &log, FlushPhase::Upserts));
    session.register(Recording::boxed("C", &log));

    let err = session.commit_all().unwrap_err();
    match err {
        SessionError::Flush {
            table,
            phase,
            committed,
            ..
        } => {
            assert_eq!(table.as_str(), "B");
            assert_eq!(phase, FlushPhase::Upserts);
            assert_eq!(committed, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    // C was never reached
    assert_eq!(upserts(&log), vec!["A"]);
}

#[test]
fn delete_phase_failure_counts_earlier_upserts() {
    let log: FlushLog = Rc::default();

    let mut session = Session::new(NoDependencies);
    session.register(Recording::boxed("A", &log));
    session.register(Recording::failing("B", &log, FlushPhase::Deletes));

    let err = session.commit_all().unwrap_err();
    match err {
        SessionError::Flush {
            table,
            phase,
            committed,
            ..
        } => {
            assert_eq!(table.as_str(), "B");
            assert_eq!(phase, FlushPhase::Deletes);
            // both upsert flushes succeeded before the delete phase, and the
            // delete phase runs in reverse order so B fails first
            assert_eq!(committed, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn collections_without_pending_work_are_skipped() {
    let log: FlushLog = Rc::default();

    let mut session = Session::new(NoDependencies);
    session.register(Recording::idle("Empty", &log));
    session.register(Recording::boxed("Busy", &log));

    let summary = session.commit_all().unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(upserts(&log), vec!["Busy"]);
}

#[test]
fn dependency_cycle_is_reported_not_committed() {
    let log: FlushLog = Rc::default();
    let schema = fk_schema(&[("A", "B"), ("B", "A")], &["A", "B"]);

    let mut session = Session::new(schema);
    session.register(Recording::boxed("A", &log));
    session.register(Recording::boxed("B", &log));

    let err = session.commit_all().unwrap_err();
    assert!(matches!(err, SessionError::DependencyCycle { .. }));
    assert!(log.borrow().is_empty());
}

#[test]
fn conflict_detection_is_an_advertised_gap() {
    let session = Session::new(NoDependencies);
    assert!(!session.supports_conflict_detection());
}

#[test]
fn change_text_placeholder_for_collections_without_the_capability() {
    let log: FlushLog = Rc::default();
    let mut session = Session::new(NoDependencies);
    session.register(Recording::boxed("Customer", &log));

    let text = session.change_text();
    assert!(text.contains("Customer"));
    assert!(text.contains("no preview available"));
}

//! Integration tests for the naming engine against schema-shaped inputs.

use sqlgen_model::{NamingOptions, OverrideTable, TargetLanguage};
use sqlgen_naming::NamingEngine;

fn oracle_style_engine() -> NamingEngine {
    NamingEngine::new(
        OverrideTable::empty(),
        NamingOptions::new()
            .with_uppercase_id_suffix(true)
            .with_uppercase_table_name(true),
        TargetLanguage::Rust,
    )
}

#[test]
fn oracle_shouting_schema_comes_out_idiomatic() {
    let engine = oracle_style_engine();

    assert_eq!(engine.table_name_singular("PRODUCT"), "Product");
    assert_eq!(engine.table_name_plural("PRODUCT"), "Products");
    assert_eq!(engine.field_name("PRODUCTID"), "ProductID");
    assert_eq!(engine.field_name("UNITPRICE"), "Unitprice");
}

#[test]
fn sql_server_casing_is_preserved() {
    let engine = oracle_style_engine();

    assert_eq!(engine.table_name_plural("orderDetails"), "orderDetails");
    assert_eq!(engine.field_name("unitPrice"), "unitPrice");
}

#[test]
fn underscored_schema_keeps_segment_boundaries() {
    let engine = oracle_style_engine();

    assert_eq!(engine.table_name_singular("order_details"), "Order_Detail");
    assert_eq!(engine.table_name_plural("order_details"), "Order_Details");
}

#[test]
fn overrides_patch_irregular_plurals() {
    let overrides = OverrideTable::from_pairs([("PERSON", "People"), ("STATUS", "Statuses")]);
    let engine = NamingEngine::new(overrides, NamingOptions::default(), TargetLanguage::Rust);

    // heuristic alone would produce "Persons" and "Statuse"
    assert_eq!(engine.table_name_plural("PERSON"), "People");
    assert_eq!(engine.table_name_plural("STATUS"), "Statuses");
    assert_eq!(engine.table_name_plural("ORDER"), "Orders");
}

#[test]
fn stored_procedure_names_pass_through_rename() {
    let overrides = OverrideTable::from_pairs([("getproductcount", "GetProductCount")]);
    let engine = NamingEngine::new(overrides, NamingOptions::default(), TargetLanguage::Rust);

    assert_eq!(engine.rename("getproductcount"), "GetProductCount");
    assert_eq!(engine.rename("sp_other"), "sp_other");
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn any_engine() -> impl Strategy<Value = NamingEngine> {
        (
            proptest::collection::vec(("[A-Za-z_]{1,12}", "[A-Za-z_]{1,12}"), 0..4),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(pairs, id_suffix, ucase)| {
                NamingEngine::new(
                    OverrideTable::from_pairs(pairs),
                    NamingOptions::new()
                        .with_uppercase_id_suffix(id_suffix)
                        .with_uppercase_table_name(ucase),
                    TargetLanguage::Rust,
                )
            })
    }

    proptest! {
        #[test]
        fn every_operation_is_deterministic(engine in any_engine(), raw in "\\PC{0,24}") {
            prop_assert_eq!(engine.table_name_plural(&raw), engine.table_name_plural(&raw));
            prop_assert_eq!(engine.table_name_singular(&raw), engine.table_name_singular(&raw));
            prop_assert_eq!(engine.rename(&raw), engine.rename(&raw));
            prop_assert_eq!(engine.field_name(&raw), engine.field_name(&raw));
        }

        #[test]
        fn override_always_wins(raw in "[A-Za-z_]{1,12}", renamed in "[A-Za-z_]{1,12}") {
            let overrides = OverrideTable::from_pairs([(raw.clone(), renamed.clone())]);
            let engine = NamingEngine::new(
                overrides,
                NamingOptions::new()
                    .with_uppercase_id_suffix(true)
                    .with_uppercase_table_name(true),
                TargetLanguage::Rust,
            );
            prop_assert_eq!(engine.table_name_plural(&raw), renamed.clone());
            prop_assert_eq!(engine.table_name_singular(&raw), renamed.clone());
            prop_assert_eq!(engine.rename(&raw), renamed.clone());
            prop_assert_eq!(engine.field_name(&raw), renamed);
        }

        #[test]
        fn pluralized_names_end_in_s(word in "[a-zA-Z]{2,16}") {
            let plural = sqlgen_naming::plural::pluralize(&word);
            prop_assert!(plural.ends_with('s'));
            let roundtrip = sqlgen_naming::plural::pluralize(&plural);
            prop_assert_eq!(roundtrip, plural);
        }

        #[test]
        fn singularize_never_grows(word in "\\PC{0,24}") {
            prop_assert!(sqlgen_naming::plural::singularize(&word).len() <= word.len());
        }
    }
}

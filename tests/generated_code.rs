#[allow(dead_code)]
#[path = "generated/dictionary.rs"]
mod dictionary;

#[allow(dead_code)]
#[path = "generated/tags.rs"]
mod tags;

use aws_sdk_dynamodb::types::AttributeValue;
use dynamodb_schema::{
    common::condition::{AttributeCondition, Condition},
    error::Error,
    planner::IndexTarget,
    value::{AttributeMap, Item, ScalarValue},
};
use rstest::rstest;

fn word() -> dictionary::SchemaItem {
    dictionary::SchemaItem {
        id: "w1".to_string(),
        side: "front".to_string(),
        category: "food".to_string(),
        level: 3,
        is_public: true,
        type_: "noun".to_string(),
        extra: ScalarValue::Number(7),
        created_at: 1_700_000_000,
    }
}

#[rstest]
#[case::all_set(word())]
#[case::defaults(dictionary::SchemaItem::default())]
#[case::empty_string_and_zero(dictionary::SchemaItem {
    side: String::new(),
    level: 0,
    is_public: false,
    extra: ScalarValue::String(String::new()),
    ..word()
})]
#[case::dynamic_boolean(dictionary::SchemaItem {
    extra: ScalarValue::Boolean(false),
    ..word()
})]
#[case::dynamic_unset(dictionary::SchemaItem {
    extra: ScalarValue::Unset,
    ..word()
})]
fn test_round_trip(#[case] record: dictionary::SchemaItem) {
    let item = record.to_item();
    let actual = dictionary::SchemaItem::from_item(&item).unwrap();
    assert_eq!(actual, record);
}

#[test]
fn test_to_item_wire_format() {
    let item = dictionary::SchemaItem {
        extra: ScalarValue::Unset,
        ..word()
    }
    .to_item();
    assert_eq!(item.get("type"), Some(&AttributeValue::S("noun".to_string())));
    assert_eq!(item.get("level"), Some(&AttributeValue::N("3".to_string())));
    assert_eq!(item.get("is_public"), Some(&AttributeValue::Bool(true)));
    assert!(!item.contains_key("extra"));
    assert_eq!(item.len(), dictionary::ATTRIBUTE_NAMES.len() - 1);
}

#[test]
fn test_from_item_type_mismatch() {
    let mut item = word().to_item();
    item.insert("level".to_string(), AttributeValue::Bool(true));
    let actual = dictionary::SchemaItem::from_item(&item);
    assert!(matches!(actual, Err(Error::Decode(_))));
}

#[test]
fn test_key() {
    let mut expected = AttributeMap::new();
    expected.insert("id".to_string(), AttributeValue::S("w1".to_string()));
    assert_eq!(word().key(), expected);
    let tag = tags::SchemaItem {
        id: "rust".to_string(),
    };
    assert_eq!(tag.key(), tag.to_item());
}

#[test]
fn test_constants() {
    assert_eq!(dictionary::TABLE_NAME, "applingo-dictionary");
    assert_eq!(dictionary::KEY_SCHEMA.secondary_indexes.len(), 3);
    assert_eq!(
        dictionary::projection(dictionary::INDEX_CATEGORY),
        Some(["category", "level"].as_slice())
    );
    assert_eq!(dictionary::projection("IndexMissing"), None);
    assert_eq!(tags::projection("IndexMissing"), None);
}

#[rstest]
#[case::index_side(
    dictionary::QueryBuilder::new().with_side("front"),
    IndexTarget::Secondary(dictionary::INDEX_SIDE),
    vec![AttributeCondition::equals("side", "front")],
    vec![]
)]
#[case::index_side_with_filter(
    dictionary::QueryBuilder::new().with_side("front").with_category("food"),
    IndexTarget::Secondary(dictionary::INDEX_SIDE),
    vec![AttributeCondition::equals("side", "front")],
    vec![AttributeCondition::equals("category", "food")]
)]
#[case::index_category_with_range(
    dictionary::QueryBuilder::new().with_level(2).with_category("food"),
    IndexTarget::Secondary(dictionary::INDEX_CATEGORY),
    vec![AttributeCondition::equals("category", "food"), AttributeCondition::equals("level", 2_i64)],
    vec![]
)]
#[case::primary(
    dictionary::QueryBuilder::new().with_id("w1").with_is_public(true),
    IndexTarget::Primary,
    vec![AttributeCondition::equals("id", "w1")],
    vec![AttributeCondition::equals("is_public", true)]
)]
fn test_resolve(
    #[case] builder: dictionary::QueryBuilder,
    #[case] target: IndexTarget,
    #[case] key_condition: Vec<AttributeCondition>,
    #[case] filter_condition: Vec<AttributeCondition>,
) {
    let resolution = builder.resolve().unwrap();
    assert_eq!(resolution.target, target);
    assert_eq!(resolution.key_condition, key_condition);
    assert_eq!(resolution.filter_condition, filter_condition);
}

#[rstest]
#[case::non_key_attribute(dictionary::QueryBuilder::new().with_is_public(true))]
#[case::non_key_attributes(dictionary::QueryBuilder::new().with_type("noun").with_created_at(1))]
#[case::empty(dictionary::QueryBuilder::new())]
fn test_no_suitable_index(#[case] builder: dictionary::QueryBuilder) {
    let actual = builder.resolve();
    assert!(matches!(actual, Err(Error::NoSuitableIndex { .. })));
}

#[test]
fn test_category_resolves_to_index_category() {
    let actual = dictionary::QueryBuilder::new()
        .with_category("food")
        .resolve()
        .unwrap();
    assert_eq!(actual.target, IndexTarget::Secondary(dictionary::INDEX_CATEGORY));
}

#[test]
fn test_last_write_wins() {
    let resolution = dictionary::QueryBuilder::new()
        .with_side("front")
        .with_side("back")
        .resolve()
        .unwrap();
    assert_eq!(
        resolution.key_condition,
        vec![AttributeCondition::equals("side", "back")]
    );
}

#[test]
fn test_build() {
    let query = dictionary::QueryBuilder::new()
        .with_side("front")
        .with_category("food")
        .sort_key(Condition::GreaterThan(ScalarValue::Number(1_700_000_000)))
        .order_by_desc()
        .limit(20)
        .build()
        .unwrap();
    assert_eq!(query.scan_index_forward, Some(false));
    assert_eq!(query.multiple_read_args.limit, Some(20));
    assert_eq!(
        query.multiple_read_args.index_name.as_deref(),
        Some(dictionary::INDEX_SIDE)
    );
    assert_eq!(query.multiple_read_args.table_name, dictionary::TABLE_NAME);
    assert_eq!(query.key_condition.len(), 2);
    assert_eq!(query.key_condition[1].name, "created_at");
}

#[test]
fn test_build_sort_key_without_range_key() {
    let actual = tags::QueryBuilder::new()
        .with_id("rust")
        .sort_key(Condition::BeginsWith("r".to_string()))
        .build();
    assert!(matches!(actual, Err(Error::Validation(_))));
}

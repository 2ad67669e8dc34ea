use crate::{
    codegen::{GeneratorConfig, naming, writer::SourceWriter},
    error::{Error, Result},
    schema::{Attribute, ScalarType, TableSchema},
};

use std::collections::HashSet;

struct Field<'s> {
    attribute: &'s Attribute,
    ident: String,
    setter: String,
}

impl Field<'_> {
    fn rust_type(&self) -> &'static str {
        match self.attribute.scalar_type {
            ScalarType::String => "String",
            ScalarType::Number => "i64",
            ScalarType::Boolean => "bool",
            ScalarType::Dynamic(_) => "ScalarValue",
        }
    }

    fn reader(&self) -> &'static str {
        match self.attribute.scalar_type {
            ScalarType::String => "text",
            ScalarType::Number => "integer",
            ScalarType::Boolean => "boolean",
            ScalarType::Dynamic(_) => "dynamic",
        }
    }

    fn owned_value(&self) -> String {
        match self.attribute.scalar_type {
            ScalarType::Number | ScalarType::Boolean => format!("self.{}", self.ident),
            ScalarType::String | ScalarType::Dynamic(_) => format!("self.{}.clone()", self.ident),
        }
    }

    fn setter_signature(&self) -> String {
        let parameter = match self.attribute.scalar_type {
            ScalarType::String => "impl Into<String>",
            ScalarType::Number => "i64",
            ScalarType::Boolean => "bool",
            ScalarType::Dynamic(_) => "impl Into<ScalarValue>",
        };
        format!("pub fn {}(self, value: {parameter}) -> Self {{", self.setter)
    }

    fn setter_body(&self) -> String {
        let value = match self.attribute.scalar_type {
            ScalarType::String => "ScalarValue::String(value.into())",
            ScalarType::Number => "ScalarValue::Number(value)",
            ScalarType::Boolean => "ScalarValue::Boolean(value)",
            ScalarType::Dynamic(_) => "value",
        };
        format!("Self(self.0.set({:?}, {value}))", self.attribute.name)
    }
}

fn fields<'s>(schema: &'s TableSchema, config: &GeneratorConfig) -> Result<Vec<Field<'s>>> {
    let mut idents = HashSet::new();
    let mut setters = HashSet::new();
    let mut fields = Vec::new();
    for attribute in schema.all_attributes() {
        let snake = naming::to_snake_case(&attribute.name);
        if snake.is_empty() {
            return Err(Error::schema(format!(
                "attribute '{}' does not yield an identifier",
                attribute.name
            )));
        }
        let ident = config.escape.escape(&snake);
        let setter = format!("with_{snake}");
        if !idents.insert(ident.clone()) || !setters.insert(setter.clone()) {
            return Err(Error::schema(format!(
                "attribute '{}' collides with another attribute as field '{ident}'",
                attribute.name
            )));
        }
        fields.push(Field {
            attribute,
            ident,
            setter,
        });
    }
    Ok(fields)
}

/// Constants emitted for every table.
const FIXED_CONSTANTS: &[&str] = &["TABLE_NAME", "ATTRIBUTE_NAMES", "INDEX_PROJECTIONS", "KEY_SCHEMA"];

fn index_constants(schema: &TableSchema) -> Result<Vec<String>> {
    let mut constants = Vec::with_capacity(schema.secondary_indexes.len());
    let mut seen: HashSet<String> = FIXED_CONSTANTS.iter().map(|name| name.to_string()).collect();
    for index in &schema.secondary_indexes {
        let screaming = naming::to_screaming_snake_case(&index.name);
        if screaming.is_empty() {
            return Err(Error::schema(format!(
                "index '{}' does not yield an identifier",
                index.name
            )));
        }
        let constant = if screaming == "INDEX" || screaming.starts_with("INDEX_") {
            screaming
        } else {
            format!("INDEX_{}", screaming.trim_start_matches('_'))
        };
        if !seen.insert(constant.clone()) {
            return Err(Error::schema(format!(
                "index '{}' collides with another generated constant '{constant}'",
                index.name
            )));
        }
        constants.push(constant);
    }
    Ok(constants)
}

fn string_list(names: &[String]) -> String {
    let names: Vec<String> = names.iter().map(|name| format!("{name:?}")).collect();
    format!("&[{}]", names.join(", "))
}

fn optional(name: Option<&String>) -> String {
    match name {
        Some(name) => format!("Some({name:?})"),
        None => "None".to_string(),
    }
}

fn field_of<'f>(fields: &'f [Field<'_>], name: &str) -> Result<&'f Field<'f>> {
    fields
        .iter()
        .find(|field| field.attribute.name == name)
        .ok_or_else(|| Error::schema(format!("key attribute '{name}' is not declared")))
}

/// Render the source unit for `schema`.
///
/// The output depends only on the schema and the configuration, so regenerating an
/// unchanged schema yields byte-identical text.
pub fn generate(schema: &TableSchema, config: &GeneratorConfig) -> Result<String> {
    schema.validate()?;
    let projections = schema.projection_table();
    let fields = fields(schema, config)?;
    let constants = index_constants(schema)?;
    let mut writer = SourceWriter::default();

    writer.line(format!(
        "// @generated by dynamodb-schema-gen from table {:?}. Do not edit.",
        schema.name
    ));
    writer.blank();
    writer.open(format!("use {}::{{", config.crate_path));
    writer.line("common::{condition::Condition, cursor::Cursor},");
    writer.line("error::Result,");
    if schema.secondary_indexes.is_empty() {
        writer.line("planner::{self, KeySchema},");
    } else {
        writer.line("planner::{self, IndexKeys, KeySchema},");
    }
    writer.line("read::query::Query,");
    writer.line("value::{self, AttributeMap, Item, ScalarValue},");
    writer.close("};");
    writer.blank();

    writer.doc("Table name.");
    writer.line(format!("pub const TABLE_NAME: &str = {:?};", schema.name));
    writer.blank();
    for (index, constant) in schema.secondary_indexes.iter().zip(&constants) {
        writer.doc(format!("Secondary index `{}`.", index.name));
        writer.line(format!("pub const {constant}: &str = {:?};", index.name));
        writer.blank();
    }

    writer.doc("Attribute names in record order.");
    writer.open("pub const ATTRIBUTE_NAMES: &[&str] = &[");
    for field in &fields {
        writer.line(format!("{:?},", field.attribute.name));
    }
    writer.close("];");
    writer.blank();

    writer.doc("Attributes retrievable through each secondary index.");
    if schema.secondary_indexes.is_empty() {
        writer.line("pub const INDEX_PROJECTIONS: &[(&str, &[&str])] = &[];");
    } else {
        writer.open("pub const INDEX_PROJECTIONS: &[(&str, &[&str])] = &[");
        for (index, constant) in schema.secondary_indexes.iter().zip(&constants) {
            let attributes = projections.get(&index.name).unwrap_or_default();
            writer.line(format!("({constant}, {}),", string_list(attributes)));
        }
        writer.close("];");
    }
    writer.blank();

    writer.doc("Key structures visited by index resolution, in declaration order.");
    writer.open("pub const KEY_SCHEMA: KeySchema = KeySchema {");
    writer.line("table_name: TABLE_NAME,");
    writer.line(format!("hash_key: {:?},", schema.hash_key));
    writer.line(format!("range_key: {},", optional(schema.range_key.as_ref())));
    if schema.secondary_indexes.is_empty() {
        writer.line("secondary_indexes: &[],");
    } else {
        writer.open("secondary_indexes: &[");
        for (index, constant) in schema.secondary_indexes.iter().zip(&constants) {
            writer.open("IndexKeys {");
            writer.line(format!("name: {constant},"));
            writer.line(format!("hash_key: {:?},", index.hash_key));
            writer.line(format!("range_key: {},", optional(index.range_key.as_ref())));
            let attributes = projections.get(&index.name).unwrap_or_default();
            writer.line(format!("projection: {},", string_list(attributes)));
            writer.close("},");
        }
        writer.close("],");
    }
    writer.close("};");
    writer.blank();

    writer.doc("Attributes retrievable through `index`.");
    writer.open("pub fn projection(index: &str) -> Option<&'static [&'static str]> {");
    writer.line("INDEX_PROJECTIONS");
    writer.line("    .iter()");
    writer.line("    .find(|(name, _)| *name == index)");
    writer.line("    .map(|(_, attributes)| *attributes)");
    writer.close("}");
    writer.blank();

    writer.doc(format!("Record of table `{}`.", schema.name));
    writer.line("#[derive(Clone, Debug, Default, PartialEq)]");
    writer.open("pub struct SchemaItem {");
    for field in &fields {
        writer.doc(format!("Attribute `{}`.", field.attribute.name));
        writer.line(format!("pub {}: {},", field.ident, field.rust_type()));
    }
    writer.close("}");
    writer.blank();

    let mut keys = vec![field_of(&fields, &schema.hash_key)?];
    if let Some(range_key) = &schema.range_key {
        keys.push(field_of(&fields, range_key)?);
    }
    writer.open("impl Item for SchemaItem {");
    writer.open("fn to_item(&self) -> AttributeMap {");
    writer.line(format!(
        "let mut item = AttributeMap::with_capacity({});",
        fields.len()
    ));
    for field in &fields {
        writer.line(format!(
            "value::insert(&mut item, {:?}, {});",
            field.attribute.name,
            field.owned_value()
        ));
    }
    writer.line("item");
    writer.close("}");
    writer.blank();
    writer.open("fn from_item(item: &AttributeMap) -> Result<Self> {");
    writer.open("Ok(Self {");
    for field in &fields {
        writer.line(format!(
            "{}: value::{}(item, {:?})?,",
            field.ident,
            field.reader(),
            field.attribute.name
        ));
    }
    writer.close("})");
    writer.close("}");
    writer.blank();
    writer.open("fn key(&self) -> AttributeMap {");
    writer.line(format!(
        "let mut key = AttributeMap::with_capacity({});",
        keys.len()
    ));
    for field in &keys {
        writer.line(format!(
            "value::insert(&mut key, {:?}, {});",
            field.attribute.name,
            field.owned_value()
        ));
    }
    writer.line("key");
    writer.close("}");
    writer.close("}");
    writer.blank();

    writer.doc(format!("Index-resolving query builder for table `{}`.", schema.name));
    writer.line("#[derive(Clone, Debug)]");
    writer.line("pub struct QueryBuilder(planner::QueryBuilder<'static>);");
    writer.blank();
    writer.open("impl Default for QueryBuilder {");
    writer.open("fn default() -> Self {");
    writer.line("Self::new()");
    writer.close("}");
    writer.close("}");
    writer.blank();
    writer.open("impl QueryBuilder {");
    writer.doc("Empty builder.");
    writer.open("pub fn new() -> Self {");
    writer.line("Self(planner::QueryBuilder::new(&KEY_SCHEMA))");
    writer.close("}");
    for field in &fields {
        writer.blank();
        writer.doc(format!("Bind `{}` to `value`.", field.attribute.name));
        writer.open(field.setter_signature());
        writer.line(field.setter_body());
        writer.close("}");
    }
    for (doc, signature, body) in [
        (
            "Maximum number of items evaluated per page.",
            "pub fn limit(self, limit: i32) -> Self {",
            "Self(self.0.limit(limit))",
        ),
        (
            "Return items in descending range key order.",
            "pub fn order_by_desc(self) -> Self {",
            "Self(self.0.order_by_desc())",
        ),
        (
            "Resume after the page that returned `cursor`.",
            "pub fn start_from(self, cursor: Cursor) -> Self {",
            "Self(self.0.start_from(cursor))",
        ),
        (
            "Range operator on the resolved range key.",
            "pub fn sort_key(self, condition: Condition) -> Self {",
            "Self(self.0.sort_key(condition))",
        ),
        (
            "Select the index and split the bound attributes.",
            "pub fn resolve(&self) -> Result<planner::Resolution> {",
            "self.0.resolve()",
        ),
        (
            "Resolve and assemble the query request.",
            "pub fn build(self) -> Result<Query> {",
            "self.0.build()",
        ),
    ] {
        writer.blank();
        writer.doc(doc);
        writer.open(signature);
        writer.line(body);
        writer.close("}");
    }
    writer.close("}");

    Ok(writer.finish())
}

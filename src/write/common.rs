use crate::{
    common,
    error::{Error, Result},
    value::AttributeMap,
};

use std::collections;

/// Processed write arguments, ready for the request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WriteInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values: Option<AttributeMap>,
    pub(crate) table_name: String,
}

impl WriteInput {
    /// Merge an expression operation into this write operation.
    pub(crate) fn merge_expression(&mut self, operation: common::ExpressionInput) -> String {
        operation.merge_into(
            &mut self.expression_attribute_names,
            &mut self.expression_attribute_values,
        )
    }
}

/// Arguments common to all write operations (Put, Update, Delete).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Precondition that must hold for the write to be applied.
    pub condition: Option<common::condition::ConditionExpression>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl WriteArgs {
    /// Table `table_name` without precondition.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    /// Convert the arguments, numbering condition placeholders from `index`.
    pub(crate) fn into_input(self, index: &mut usize) -> Result<WriteInput> {
        common::validate_table(&self.table_name)?;
        let mut operation = WriteInput {
            table_name: self.table_name,
            ..Default::default()
        };
        if let Some(condition) = self.condition.filter(|condition| !condition.is_empty()) {
            let condition_operation = condition.get_expression_operation(index)?;
            operation.condition_expression = Some(operation.merge_expression(condition_operation));
        }
        Ok(operation)
    }
}

impl TryFrom<WriteArgs> for WriteInput {
    type Error = Error;

    fn try_from(write_args: WriteArgs) -> Result<Self> {
        write_args.into_input(&mut 0)
    }
}

/// apply common write operation settings to a builder
#[macro_export]
macro_rules! apply_write_operation {
    ($builder:expr, $write_operation:expr) => {
        $builder
            .set_condition_expression($write_operation.condition_expression)
            .set_expression_attribute_names($write_operation.expression_attribute_names)
            .set_expression_attribute_values($write_operation.expression_attribute_values)
            .table_name($write_operation.table_name)
    };
}

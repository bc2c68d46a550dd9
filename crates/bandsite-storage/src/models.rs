use crate::schema::slots;

use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = slots)]
pub struct SlotRow {
  pub name: String,
  pub contents: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = slots)]
pub struct NewSlotRow<'a> {
  pub name: &'a str,
  pub contents: &'a str,
}

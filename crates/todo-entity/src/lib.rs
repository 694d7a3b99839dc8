//! # todo-entity
//!
//! Domain entity models for the todo backend. [`todo::TodoItem`] is the
//! table row; the request payloads describe the writes clients may make.

pub mod todo;

pub use todo::{CreateTodo, TodoItem, UpdateTodo};

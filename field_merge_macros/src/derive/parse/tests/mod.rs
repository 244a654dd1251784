//! Unit tests for derive attribute and type parsing.

mod type_utils;

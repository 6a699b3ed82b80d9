/*!
Small generic helpers that do not belong to a single subsystem.
*/

pub mod ordered_set;
